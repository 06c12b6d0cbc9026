//! Console front end for perfect-play tic-tac-toe.
//!
//! Everything with I/O lives here: the turn loop, human input, board
//! rendering, configuration and the subcommand handlers behind the
//! `perfect_tictactoe` binary. Game logic comes from `perfect_tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod commands;
mod config;
mod orchestrator;
pub mod players;
mod ui;

pub use config::{ConfigError, GameConfig, DEFAULT_CONFIG_PATH};
pub use orchestrator::{MatchReport, Orchestrator};
pub use ui::{announce, render_board};
