//! Moves and move errors.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub(crate) const SIZE: usize = 3;

/// A validated `(row, col)` coordinate, both in `0..3`.
///
/// Out-of-range coordinates cannot be represented, so everything that takes
/// a `Move` is free of range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: usize,
    col: usize,
}

#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::try_new(raw.row, raw.col)
    }
}

impl Move {
    /// All nine moves in row-major order. This is the search's scan order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a move.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`. Use [`Move::try_new`] for
    /// unvalidated input.
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < SIZE && col < SIZE, "move coordinates must be in 0..3");
        Self { row, col }
    }

    /// Creates a move from unvalidated coordinates.
    pub fn try_new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < SIZE && col < SIZE {
            Ok(Self { row, col })
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0-based.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0-based.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are outside the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already taken by {}", at, by)]
    Occupied {
        /// Target of the rejected move.
        at: Move,
        /// Mark already in the cell.
        by: Mark,
    },

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (index, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), index);
            assert_eq!(Move::from_index(index), Some(*mv));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(Move::try_new(2, 2), Ok(Move::new(2, 2)));
        assert_eq!(
            Move::try_new(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert!(Move::try_new(0, 7).is_err());
    }

    #[test]
    #[should_panic(expected = "move coordinates must be in 0..3")]
    fn test_new_fails_fast_out_of_range() {
        let row = 3;
        let _ = Move::new(row, 1);
    }

    #[test]
    fn test_deserialize_validates_range() {
        let mv: Move = serde_json::from_str(r#"{"row":1,"col":2}"#).unwrap();
        assert_eq!(mv, Move::new(1, 2));
        assert!(serde_json::from_str::<Move>(r#"{"row":4,"col":0}"#).is_err());
    }
}
