//! Computer move selection.
//!
//! Policies are trait-based so the strategy can be swapped:
//! - `RandomPolicy`: any available cell, chosen at random
//! - `FirstAvailablePolicy`: the lowest available cell in row-major order
//!
//! Neither looks ahead. A policy must only return positions from
//! `Board::available_positions`.

use tracing::debug;

use crate::core::{Board, BoardPosition, GameError, GameRng};

/// Chooses where the computer player moves.
pub trait ComputerPolicy: Send {
    /// Pick an available position on `board`.
    ///
    /// Fails with `GameError::NoAvailablePositions` on a full board.
    fn select_position(&mut self, board: &Board) -> Result<BoardPosition, GameError>;
}

/// Picks a uniformly random available cell.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl ComputerPolicy for RandomPolicy {
    fn select_position(&mut self, board: &Board) -> Result<BoardPosition, GameError> {
        // Sort first so a seeded RNG gives the same pick regardless of set order.
        let mut available: Vec<BoardPosition> = board.available_positions().into_iter().collect();
        available.sort_unstable();

        let position = self
            .rng
            .choose(&available)
            .copied()
            .ok_or(GameError::NoAvailablePositions)?;
        debug!(%position, "random policy chose");
        Ok(position)
    }
}

/// Picks the first available cell, scanning rows top to bottom.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAvailablePolicy;

impl ComputerPolicy for FirstAvailablePolicy {
    fn select_position(&mut self, board: &Board) -> Result<BoardPosition, GameError> {
        board
            .available_positions()
            .into_iter()
            .min()
            .ok_or(GameError::NoAvailablePositions)
    }
}
