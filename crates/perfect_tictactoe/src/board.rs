//! The 3x3 grid.

use super::action::Move;
use super::rules;
use super::types::{Cell, Mark, Outcome};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Mutable and small enough to copy. No reachability validation is done:
/// any arrangement of cells can be built, and the queries report what they
/// see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

/// Placing on an occupied cell. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Cell {} is already taken by {}", at, by)]
pub struct PlaceError {
    /// Target of the rejected placement.
    pub at: Move,
    /// Mark already in the cell.
    pub by: Mark,
}

impl std::error::Error for PlaceError {}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given move.
    pub fn get(&self, at: Move) -> Cell {
        self.cells[at.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty_at(&self, at: Move) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|mv| self.is_empty_at(*mv))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Places `mark` at `at` if the cell is empty.
    ///
    /// An occupied target is an ordinary outcome, not a bug: the caller is
    /// expected to check the result and ask again.
    #[instrument(level = "trace", skip(self))]
    pub fn place_mark(&mut self, at: Move, mark: Mark) -> Result<(), PlaceError> {
        match self.get(at) {
            Cell::Empty => {
                self.cells[at.index()] = Cell::Marked(mark);
                Ok(())
            }
            Cell::Marked(by) => Err(PlaceError { at, by }),
        }
    }

    /// Writes a cell unconditionally. Search-only.
    pub(crate) fn set(&mut self, at: Move, cell: Cell) {
        self.cells[at.index()] = cell;
    }

    /// Restores a cell to empty. Search-only.
    pub(crate) fn clear(&mut self, at: Move) {
        self.set(at, Cell::Empty);
    }

    /// Returns the mark of the first completed line, in line-table order.
    ///
    /// A board with two completed lines is not rejected; the first one found
    /// is reported.
    pub fn has_line(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Won if a line is complete, else Draw if full, else InProgress.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.has_line() {
            Outcome::Won(mark)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// True once no further moves are legal.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Wrong number of cell characters.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character that is not a cell or separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCell(char),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells from `X`, `O` and `.`/`-`/`_` (empty).
    ///
    /// Whitespace, `/` and `|` are ignored so `"X.O/.X./..O"` and the
    /// multi-line [`Display`](std::fmt::Display) form both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let cell = match c {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::InvalidCell(other)),
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Cell>| ParseBoardError::WrongLength(cells.len()))?;
        Ok(Self { cells })
    }
}
