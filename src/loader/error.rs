//! Configuration loading errors.

use std::path::PathBuf;

use derive_more::{Display, Error, From};

use crate::core::ConfigError;

/// Failure to obtain a `GameConfiguration` from a file.
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("could not read configuration file '{}': {source}", path.display())]
    #[from(skip)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML or misses a required key.
    #[display("malformed configuration: {_0}")]
    Parse(toml::de::Error),

    /// The values were read but rejected.
    #[display("invalid configuration: {_0}")]
    Invalid(ConfigError),
}

impl LoadError {
    /// True when the file itself could not be read.
    #[must_use]
    pub fn is_unreadable(&self) -> bool {
        matches!(self, LoadError::Io { .. })
    }
}
