//! TOML configuration files.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::core::{ConfigError, GameConfiguration};

use super::error::LoadError;

/// Built-in configuration used when no file is given.
pub const DEFAULT_CONFIGURATION: &str = include_str!("../../tic-tac-three.toml");

/// On-disk layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    playground: PlaygroundSection,
    players: PlayersSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaygroundSection {
    size: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlayersSection {
    marks: Vec<String>,
}

impl ConfigFile {
    fn validate(self) -> Result<GameConfiguration, LoadError> {
        let mut marks = Vec::with_capacity(self.players.marks.len());
        for (index, raw) in self.players.marks.iter().enumerate() {
            let trimmed = raw.trim();
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(mark), None) => marks.push(mark),
                _ => {
                    return Err(ConfigError::InvalidMark {
                        index,
                        mark: raw.clone(),
                    }
                    .into())
                }
            }
        }

        Ok(GameConfiguration::new(&marks, self.playground.size)?)
    }
}

/// Reads and validates game configurations.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfigurationLoader;

impl ConfigurationLoader {
    /// Parse a configuration from TOML text.
    pub fn parse(text: &str) -> Result<GameConfiguration, LoadError> {
        let file: ConfigFile = toml::from_str(text)?;
        file.validate()
    }

    /// Load a configuration file.
    #[instrument]
    pub fn load(path: &Path) -> Result<GameConfiguration, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// The built-in configuration: a 3x3 board with marks X, O and A.
    pub fn load_default() -> Result<GameConfiguration, LoadError> {
        Self::parse(DEFAULT_CONFIGURATION)
    }

    /// Resolve the configuration the application should start with.
    ///
    /// - no path: the built-in default
    /// - unreadable file: warn and fall back to the default
    /// - readable but invalid file: warn and return `None`
    #[instrument]
    pub fn load_game_configuration(path: Option<&Path>) -> Option<GameConfiguration> {
        let result = match path {
            None => Self::load_default(),
            Some(path) => match Self::load(path) {
                Err(err) if err.is_unreadable() => {
                    warn!(%err, "falling back to the default configuration");
                    Self::load_default()
                }
                other => other,
            },
        };

        match result {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(%err, "configuration rejected");
                None
            }
        }
    }
}
