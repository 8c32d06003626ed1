//! The N x N playing grid.
//!
//! ## Copy-on-write
//!
//! A `Board` is never mutated once published. Placing a mark returns a new
//! board that shares structure with the old one through `im` persistent
//! collections, so every earlier `Game` snapshot stays valid and cloning a
//! board is O(1).
//!
//! ## Win detection
//!
//! Only the lines through the last placed cell are inspected: its row, its
//! column, and each diagonal only when the cell lies on it.

use std::hash::{BuildHasherDefault, Hash, Hasher};

use im::{HashSet as ImHashSet, Vector};
use rustc_hash::FxHasher;
use serde::Serialize;

use super::error::GameError;
use super::position::BoardPosition;

/// Smallest supported board dimension.
pub const MIN_BOARD_SIZE: usize = 3;

/// Persistent set of board positions.
pub type PositionSet = ImHashSet<BoardPosition, BuildHasherDefault<FxHasher>>;

/// Immutable N x N grid of optional marks.
#[derive(Clone, Debug, Serialize)]
pub struct Board {
    size: usize,

    /// Cells in row-major order.
    grid: Vector<Option<char>>,

    /// Unoccupied cells, kept in sync with `grid`.
    #[serde(skip)]
    available: PositionSet,
}

impl Board {
    /// Create an empty board.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall { size });
        }

        Ok(Self {
            size,
            grid: std::iter::repeat(None).take(size * size).collect(),
            available: BoardPosition::all(size).collect(),
        })
    }

    /// Create a board from pre-filled rows.
    ///
    /// The outer vector gives the size; every row must have the same length.
    pub fn from_grid(rows: Vec<Vec<Option<char>>>) -> Result<Self, GameError> {
        let size = rows.len();
        if size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall { size });
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, cells)| cells.len() != size) {
            return Err(GameError::GridNotSquare { row, len: cells.len(), size });
        }

        let grid: Vector<Option<char>> = rows.into_iter().flatten().collect();
        let available = BoardPosition::all(size)
            .filter(|pos| grid[pos.row() * size + pos.col()].is_none())
            .collect();

        Ok(Self { size, grid, available })
    }

    /// Get the board dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff `0 <= row, col < size`.
    #[must_use]
    pub fn is_position_valid(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// True iff the position is valid and carries a mark.
    #[must_use]
    pub fn is_position_occupied(&self, row: usize, col: usize) -> bool {
        self.mark_at(row, col).is_some()
    }

    /// Get the mark at a position, `None` if empty or invalid.
    #[must_use]
    pub fn mark_at(&self, row: usize, col: usize) -> Option<char> {
        if !self.is_position_valid(row, col) {
            return None;
        }
        self.grid[row * self.size + col]
    }

    /// Get all unoccupied positions.
    ///
    /// The returned set is an O(1) copy; changing it does not touch the board.
    #[must_use]
    pub fn available_positions(&self) -> PositionSet {
        self.available.clone()
    }

    /// Number of unoccupied positions.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Get a deep copy of the grid as rows.
    #[must_use]
    pub fn board_grid(&self) -> Vec<Vec<Option<char>>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.grid[row * self.size + col]).collect())
            .collect()
    }

    /// Check whether the mark at `position` completes a line.
    ///
    /// Lines considered: the position's row, its column, the left-to-right
    /// diagonal when `row == col`, and the right-to-left diagonal when
    /// `row + col == size - 1`. An invalid position never wins.
    #[must_use]
    pub fn check_for_a_winner(&self, position: BoardPosition) -> bool {
        let (row, col) = (position.row(), position.col());
        if !self.is_position_valid(row, col) {
            return false;
        }

        self.check_row(row)
            || self.check_column(col)
            || self.check_diagonal_left_to_right(row, col)
            || self.check_diagonal_right_to_left(row, col)
    }

    /// Return a new board with `mark` placed at `position`.
    ///
    /// Callers must have checked that the position is valid and free.
    pub(crate) fn with_mark(&self, position: BoardPosition, mark: char) -> Board {
        let mut next = self.clone();
        next.grid.set(position.row() * self.size + position.col(), Some(mark));
        next.available.remove(&position);
        next
    }

    fn check_row(&self, row: usize) -> bool {
        (1..self.size).all(|col| self.same_mark((row, col), (row, col - 1)))
    }

    fn check_column(&self, col: usize) -> bool {
        (1..self.size).all(|row| self.same_mark((row, col), (row - 1, col)))
    }

    fn check_diagonal_left_to_right(&self, row: usize, col: usize) -> bool {
        row == col && (1..self.size).all(|i| self.same_mark((i, i), (i - 1, i - 1)))
    }

    fn check_diagonal_right_to_left(&self, row: usize, col: usize) -> bool {
        let last = self.size - 1;

        row + col == last
            && (1..self.size).all(|i| self.same_mark((i, last - i), (i - 1, last - i + 1)))
    }

    fn same_mark(&self, current: (usize, usize), previous: (usize, usize)) -> bool {
        match (self.mark_at(current.0, current.1), self.mark_at(previous.0, previous.1)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.grid == other.grid
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.grid.hash(state);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size * 2 + 1].join(" ");

        writeln!(f, "{}", separator)?;
        for row in 0..self.size {
            write!(f, "| ")?;
            for col in 0..self.size {
                write!(f, "{} | ", self.mark_at(row, col).unwrap_or(' '))?;
            }
            writeln!(f)?;
            writeln!(f, "{}", separator)?;
        }
        Ok(())
    }
}
