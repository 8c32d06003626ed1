//! Board coordinates.
//!
//! `BoardPosition` is a zero-based (row, col) pair. It carries no board size,
//! so validity is always checked against a concrete `Board`.

use serde::{Deserialize, Serialize};

/// Zero-based cell coordinate.
///
/// Ordered row-major, so sorting a set of positions walks the board
/// top-left to bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardPosition {
    row: usize,
    col: usize,
}

impl BoardPosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Get the row (0-based).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Get the column (0-based).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Iterate over every position of a `size` x `size` board in row-major order.
    ///
    /// ```
    /// use tic_tac_three::core::BoardPosition;
    ///
    /// let all: Vec<_> = BoardPosition::all(3).collect();
    /// assert_eq!(all.len(), 9);
    /// assert_eq!(all[0], BoardPosition::new(0, 0));
    /// assert_eq!(all[5], BoardPosition::new(1, 2));
    /// ```
    pub fn all(size: usize) -> impl Iterator<Item = BoardPosition> {
        (0..size).flat_map(move |row| (0..size).map(move |col| BoardPosition { row, col }))
    }
}

impl std::fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}][{}]", self.row, self.col)
    }
}
