//! Handlers behind each subcommand.
//!
//! Readers and writers are passed in so the binary can hand over stdin and
//! stdout while tests use in-memory buffers.

use crate::config::GameConfig;
use crate::orchestrator::{MatchReport, Orchestrator};
use crate::players::{HumanPlayer, MinimaxPlayer, Player};
use crate::ui::render_board;
use anyhow::{Context, Result};
use perfect_tictactoe::{search, Board, Mark};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Human against the minimax agent.
///
/// Prompts go to `prompts`; the board and announcements go to `output`.
#[instrument(skip_all, fields(human = %config.human_mark(), first = %config.first_mark()))]
pub fn play<R, P, W>(config: &GameConfig, input: R, prompts: P, output: W) -> Result<MatchReport>
where
    R: BufRead + 'static,
    P: Write + 'static,
    W: Write,
{
    let human: Box<dyn Player> = Box::new(HumanPlayer::new(config.human_name().clone(), input, prompts));
    let bot: Box<dyn Player> = Box::new(MinimaxPlayer::new(config.agent_name().clone(), config.agent_mark()));

    let (player_x, player_o) = match config.human_mark() {
        Mark::X => (human, bot),
        Mark::O => (bot, human),
    };
    Orchestrator::new(*config.first_mark(), player_x, player_o, output).run()
}

/// Agent against agent. Perfect play always ends in a draw.
#[instrument(skip(output))]
pub fn selfplay<W: Write>(first: Mark, output: W) -> Result<MatchReport> {
    let player_x = Box::new(MinimaxPlayer::new("Bot X", Mark::X));
    let player_o = Box::new(MinimaxPlayer::new("Bot O", Mark::O));
    Orchestrator::new(first, player_x, player_o, output).run()
}

/// Prints the move the agent would play for `mark` on `board`.
///
/// Text output uses 1-based column and row, matching the prompts; JSON uses
/// 0-based `row`/`col` plus the minimax `score`.
#[instrument(skip(output), fields(board = %board))]
pub fn best_move<W: Write>(mut board: Board, mark: Mark, json: bool, mut output: W) -> Result<()> {
    let best = search::choose_scored(&mut board, mark).context("No move to choose")?;
    info!(mv = %best.mv, score = best.score, "Best move found");

    if json {
        writeln!(output, "{}", serde_json::to_string(&best)?)?;
    } else {
        writeln!(
            output,
            "{} plays column {}, row {} (score {})",
            mark,
            best.mv.col() + 1,
            best.mv.row() + 1,
            best.score
        )?;
    }
    Ok(())
}

/// Prints every legal move for `mark` with its minimax score.
#[instrument(skip(output), fields(board = %board))]
pub fn analyze<W: Write>(mut board: Board, mark: Mark, json: bool, mut output: W) -> Result<()> {
    let scored = search::evaluate(&mut board, mark).context("Nothing to analyze")?;

    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&scored)?)?;
        return Ok(());
    }

    write!(output, "{}", render_board(&board))?;
    writeln!(output)?;
    writeln!(output, "Scores for {}:", mark)?;
    for s in &scored {
        writeln!(
            output,
            "  column {}, row {}: {:>3}",
            s.mv.col() + 1,
            s.mv.row() + 1,
            s.score
        )?;
    }
    Ok(())
}
