//! The result of resolving one turn's input.

use serde::{Deserialize, Serialize};

use super::position::BoardPosition;

/// A resolved move, produced by `MoveResolver` and consumed right away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerMove {
    /// Place the active player's mark here. Already checked valid and free.
    Place(BoardPosition),
    /// The human asked to abandon the game.
    Escape,
    /// Nothing to play: the game is over, or the input was rejected.
    Empty,
}

impl PlayerMove {
    /// True iff the move carries a position.
    #[must_use]
    pub fn is_valid_move(&self) -> bool {
        matches!(self, PlayerMove::Place(_))
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        matches!(self, PlayerMove::Escape)
    }

    /// Get the target position, if any.
    #[must_use]
    pub fn position(&self) -> Option<BoardPosition> {
        match self {
            PlayerMove::Place(position) => Some(*position),
            PlayerMove::Escape | PlayerMove::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place() {
        let m = PlayerMove::Place(BoardPosition::new(1, 1));
        assert!(m.is_valid_move());
        assert!(!m.is_escape());
        assert_eq!(m.position(), Some(BoardPosition::new(1, 1)));
    }

    #[test]
    fn test_escape_and_empty_carry_no_position() {
        assert!(PlayerMove::Escape.is_escape());
        assert!(!PlayerMove::Escape.is_valid_move());
        assert_eq!(PlayerMove::Escape.position(), None);

        assert!(!PlayerMove::Empty.is_escape());
        assert!(!PlayerMove::Empty.is_valid_move());
        assert_eq!(PlayerMove::Empty.position(), None);
    }
}
