//! Game configuration.
//!
//! A `GameConfiguration` is the validated input to
//! `GameEngine::start_new_game`: three distinct player marks and the
//! playground size. Reading it from a file is the job of `crate::loader`.

use derive_more::{Display, Error};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Number of players in every game.
pub const NUMBER_OF_PLAYERS: usize = 3;

/// Smallest accepted playground size.
pub const PLAYGROUND_SIZE_MIN: usize = 3;

/// Largest accepted playground size.
pub const PLAYGROUND_SIZE_MAX: usize = 10;

/// Why a configuration was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display(
        "playground size {size} is outside {}-{}",
        PLAYGROUND_SIZE_MIN,
        PLAYGROUND_SIZE_MAX
    )]
    PlaygroundSize { size: usize },

    #[display("expected {} player marks, found {count}", NUMBER_OF_PLAYERS)]
    MarkCount { count: usize },

    /// Mark that is not exactly one visible character.
    #[display("player mark {index} ({mark:?}) must be a single non-blank character")]
    InvalidMark { index: usize, mark: String },

    #[display("configuration has duplicated characters for players")]
    DuplicatedMarks,
}

/// Validated game settings. Read-only after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfiguration {
    player_marks: [char; NUMBER_OF_PLAYERS],
    playground_size: usize,
}

impl GameConfiguration {
    /// Create a configuration from marks and a playground size.
    ///
    /// The first mark belongs to the computer player.
    ///
    /// ```
    /// use tic_tac_three::core::GameConfiguration;
    ///
    /// let config = GameConfiguration::new(&['X', 'O', 'A'], 4).unwrap();
    /// assert_eq!(config.player_marks(), ['X', 'O', 'A']);
    /// assert_eq!(config.playground_size(), 4);
    ///
    /// assert!(GameConfiguration::new(&['X', 'X', 'A'], 4).is_err());
    /// ```
    pub fn new(player_marks: &[char], playground_size: usize) -> Result<Self, ConfigError> {
        if !(PLAYGROUND_SIZE_MIN..=PLAYGROUND_SIZE_MAX).contains(&playground_size) {
            return Err(ConfigError::PlaygroundSize { size: playground_size });
        }

        let marks: [char; NUMBER_OF_PLAYERS] = player_marks
            .try_into()
            .map_err(|_| ConfigError::MarkCount { count: player_marks.len() })?;

        if let Some(index) = marks.iter().position(|m| m.is_whitespace()) {
            return Err(ConfigError::InvalidMark { index, mark: marks[index].to_string() });
        }

        let distinct: FxHashSet<char> = marks.iter().copied().collect();
        if distinct.len() != marks.len() {
            return Err(ConfigError::DuplicatedMarks);
        }

        Ok(Self {
            player_marks: marks,
            playground_size,
        })
    }

    /// Get the configured marks, computer first.
    #[must_use]
    pub fn player_marks(&self) -> [char; NUMBER_OF_PLAYERS] {
        self.player_marks
    }

    /// Get the board dimension.
    #[must_use]
    pub fn playground_size(&self) -> usize {
        self.playground_size
    }
}
