//! perfect_tictactoe - console tic-tac-toe against a minimax agent.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use perfect_tictactoe_cli::{commands, GameConfig};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play(args) => run_play(args),
        Command::BestMove { board, mark, json } => {
            init_tracing("warn");
            commands::best_move(board, mark, json, io::stdout().lock())
        }
        Command::Analyze { board, mark, json } => {
            init_tracing("warn");
            commands::analyze(board, mark, json, io::stdout().lock())
        }
        Command::Selfplay { first } => {
            init_tracing("warn");
            commands::selfplay(first, io::stdout().lock()).map(|_| ())
        }
    }
}

/// Run an interactive game on stdin/stdout
fn run_play(args: PlayArgs) -> Result<()> {
    let config = GameConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(args.human, args.first);
    init_tracing(config.log_filter());

    info!(?config, "Starting interactive game");
    let report = commands::play(&config, io::stdin().lock(), io::stdout(), io::stdout())?;
    info!(outcome = %report.outcome(), moves = report.moves().len(), "Session finished");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .try_init();
}
