//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The line table is data:
//! both the board's own queries and the search's terminal test read it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_winner, winner};

use crate::Move;

/// Three cells that win when they hold the same mark.
pub type Line = [Move; 3];

/// All eight winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];
