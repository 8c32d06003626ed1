//! Core engine types: positions, board, players, game snapshots, configuration.
//!
//! Everything here is an immutable value. Nothing in this module performs I/O.

pub mod position;
pub mod board;
pub mod player;
pub mod config;
pub mod rng;
pub mod moves;
pub mod game;
pub mod error;

pub use position::BoardPosition;
pub use board::{Board, PositionSet, MIN_BOARD_SIZE};
pub use player::{Player, PlayerKind};
pub use config::{
    ConfigError, GameConfiguration, NUMBER_OF_PLAYERS, PLAYGROUND_SIZE_MAX, PLAYGROUND_SIZE_MIN,
};
pub use rng::GameRng;
pub use moves::PlayerMove;
pub use game::{Game, GameBuilder, GameOutcome, PlayerList};
pub use error::{ErrorKind, GameError};
