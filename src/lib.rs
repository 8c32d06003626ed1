//! # tic-tac-three
//!
//! Generalized tic-tac-toe for three players on an N x N board (3 <= N <= 10).
//! One player is computer-controlled; the other two type coordinates.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: A `Game` is a value. Each move produces a new
//!    one; earlier snapshots stay valid.
//!
//! 2. **Persistent Data Structures**: Boards are copy-on-write over `im-rs`,
//!    so a snapshot costs O(1) to clone.
//!
//! 3. **Injected Move Sources**: Human input and computer policy sit behind
//!    traits. The core never performs I/O.
//!
//! ## Win Detection
//!
//! Only the lines through the last placed cell are checked: its row, its
//! column, and a diagonal only if the cell lies on it.
//!
//! ## Modules
//!
//! - `core`: positions, board, players, game snapshots, configuration, RNG
//! - `rules`: `GameEngine`, the transition function between snapshots
//! - `resolver`: human input grammar, computer policies, `MoveResolver`
//! - `loader`: TOML configuration files
//! - `console`: text view, presenter and play-again loop
//!
//! ## Example
//!
//! ```
//! use tic_tac_three::{BoardPosition, GameConfiguration, GameEngine};
//!
//! let config = GameConfiguration::new(&['X', 'O', 'A'], 3).unwrap();
//! let mut engine = GameEngine::with_seed(7);
//!
//! let game = engine.start_new_game(&config).unwrap();
//! let mover = game.active_player();
//! let next = engine.apply_move(&game, BoardPosition::new(1, 1)).unwrap();
//!
//! assert_eq!(next.board().mark_at(1, 1), Some(mover.mark()));
//! assert_eq!(next.turn_count(), 1);
//! assert_eq!(game.turn_count(), 0);
//! ```

pub mod core;
pub mod rules;
pub mod resolver;
pub mod loader;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    BoardPosition, Board, PositionSet,
    Player, PlayerKind,
    Game, GameBuilder, GameOutcome,
    GameConfiguration, ConfigError,
    GameRng, PlayerMove,
    GameError, ErrorKind,
};

pub use crate::rules::GameEngine;

pub use crate::resolver::{
    ComputerPolicy, RandomPolicy, FirstAvailablePolicy,
    HumanInput, HumanCommand, MoveResolver,
};

pub use crate::loader::{ConfigurationLoader, LoadError};

pub use crate::console::{ConsoleApp, ConsoleView, Presenter, View};
