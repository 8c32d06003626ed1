//! Player identity.
//!
//! ## PlayerKind
//!
//! Who supplies moves for a player: a human typing coordinates, or the
//! computer policy. `MoveResolver` is the only place that dispatches on it.
//!
//! ## Player
//!
//! An immutable (kind, mark) pair. Marks are distinct within a game, which
//! the configuration guarantees.

use serde::{Deserialize, Serialize};

/// How a player's moves are produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves come from a line of console input.
    Human,
    /// Moves come from the computer policy.
    Computer,
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Computer => write!(f, "Computer"),
        }
    }
}

/// A participant in the game, identified by kind and mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    kind: PlayerKind,
    mark: char,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub const fn new(kind: PlayerKind, mark: char) -> Self {
        Self { kind, mark }
    }

    /// Shorthand for a human player.
    #[must_use]
    pub const fn human(mark: char) -> Self {
        Self::new(PlayerKind::Human, mark)
    }

    /// Shorthand for a computer player.
    #[must_use]
    pub const fn computer(mark: char) -> Self {
        Self::new(PlayerKind::Computer, mark)
    }

    /// Get the player kind.
    #[must_use]
    pub const fn kind(self) -> PlayerKind {
        self.kind
    }

    /// Get the mark this player places on the board.
    #[must_use]
    pub const fn mark(self) -> char {
        self.mark
    }

    #[must_use]
    pub fn is_computer(self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} player '{}'", self.kind, self.mark)
    }
}
