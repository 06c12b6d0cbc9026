//! Command-line interface for perfect_tictactoe.

use clap::{Args, Parser, Subcommand};
use perfect_tictactoe::{Board, Mark};
use std::path::PathBuf;

/// Tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play(PlayArgs),

    /// Print the agent's move for a board
    BestMove {
        /// Nine cells, row-major: X, O and . for empty (e.g. "X.O/.X./...")
        board: Board,

        /// Mark the agent plays
        #[arg(short, long)]
        mark: Mark,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Score every legal move for a board
    Analyze {
        /// Nine cells, row-major: X, O and . for empty
        board: Board,

        /// Mark to score moves for
        #[arg(short, long)]
        mark: Mark,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Watch the agent play itself
    Selfplay {
        /// Mark that moves first
        #[arg(long, default_value = "X")]
        first: Mark,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Options for an interactive game
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mark the human plays (overrides config)
    #[arg(long)]
    pub human: Option<Mark>,

    /// Mark that moves first (overrides config)
    #[arg(long)]
    pub first: Option<Mark>,
}
