//! Perfect-play tic-tac-toe.
//!
//! A 3x3 board state machine plus an exhaustive minimax search that never
//! loses. Everything here is pure and synchronous; console input, rendering
//! and the turn loop live in `perfect_tictactoe_cli`.
//!
//! # Architecture
//!
//! - **Board**: the grid, move application, line and full-board checks
//! - **Rules**: the constant line table and win/draw predicates shared by
//!   the board and the search
//! - **Search**: depth-aware minimax with a drop guard that undoes every
//!   tentative placement
//! - **Game**: the turn state machine a controller drives
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{choose_move, Board, Mark, Move};
//!
//! let mut board: Board = "XX. OO. ...".parse()?;
//! let before = board;
//! let mv = choose_move(&mut board, Mark::X)?;
//! assert_eq!(mv, Move::new(0, 2));
//! assert_eq!(board, before);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, ParseBoardError, PlaceError};
pub use game::{Game, TurnState};
pub use rules::{Line, LINES};
pub use search::{choose_move, ScoredMove, SearchAgent, SearchError};
pub use types::{Cell, Mark, Outcome};
