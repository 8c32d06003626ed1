//! Error type shared by the core engine.
//!
//! Every failure is a contract breach by the caller, never a user mistake:
//! malformed human input is represented as an empty `PlayerMove` instead.
//! `GameError::kind` tells construction errors apart from illegal-state errors.

use derive_more::{Display, Error};

use super::board::MIN_BOARD_SIZE;

/// Broad classification of a `GameError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// A constructor or builder received values that violate an invariant.
    #[display("invalid argument")]
    InvalidArgument,
    /// An operation was invoked on a state that does not allow it.
    #[display("illegal state")]
    IllegalState,
}

/// Failure raised by board, game and engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board dimension below the minimum.
    #[display("board size {size} is below the minimum of {}", MIN_BOARD_SIZE)]
    BoardTooSmall { size: usize },

    /// Pre-filled grid whose rows do not all have `size` cells.
    #[display("grid row {row} has {len} cells, expected {size}")]
    GridNotSquare { row: usize, len: usize, size: usize },

    /// A game needs at least one player.
    #[display("a game needs at least one player")]
    NoPlayers,

    /// Turn count outside `0..=max_turns`.
    #[display("turn count {turn_count} is outside 0..={max_turns}")]
    TurnCountOutOfRange { turn_count: usize, max_turns: usize },

    /// Winner that is not one of the game's players.
    #[display("winner with mark '{mark}' is not a player of this game")]
    WinnerNotInGame { mark: char },

    /// Lookup of a player slot that does not exist.
    #[display("player index {index} is outside 0..{player_count}")]
    PlayerIndexOutOfRange { index: usize, player_count: usize },

    /// Move to a cell outside the board.
    #[display("position [{row}][{col}] is invalid")]
    PositionInvalid { row: usize, col: usize },

    /// Move to a cell that already carries a mark.
    #[display("position [{row}][{col}] is already occupied by another player")]
    PositionOccupied { row: usize, col: usize },

    /// Computer policy asked to move on a full board.
    #[display("no available moves to make")]
    NoAvailablePositions,
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::BoardTooSmall { .. }
            | GameError::GridNotSquare { .. }
            | GameError::NoPlayers
            | GameError::TurnCountOutOfRange { .. }
            | GameError::WinnerNotInGame { .. }
            | GameError::PlayerIndexOutOfRange { .. } => ErrorKind::InvalidArgument,
            GameError::PositionInvalid { .. }
            | GameError::PositionOccupied { .. }
            | GameError::NoAvailablePositions => ErrorKind::IllegalState,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(GameError::BoardTooSmall { size: 2 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(GameError::NoPlayers.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            GameError::PositionOccupied { row: 0, col: 1 }.kind(),
            ErrorKind::IllegalState
        );
        assert_eq!(GameError::NoAvailablePositions.kind(), ErrorKind::IllegalState);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::BoardTooSmall { size: 2 }.to_string(),
            "board size 2 is below the minimum of 3"
        );
        assert_eq!(
            GameError::PositionOccupied { row: 1, col: 2 }.to_string(),
            "position [1][2] is already occupied by another player"
        );
        assert_eq!(
            GameError::TurnCountOutOfRange { turn_count: 10, max_turns: 9 }.to_string(),
            "turn count 10 is outside 0..=9"
        );
    }
}
