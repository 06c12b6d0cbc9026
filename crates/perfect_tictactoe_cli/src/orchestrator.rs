//! Game orchestration between players.

use crate::players::Player;
use crate::ui::{announce, render_board, turn_header};
use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use perfect_tictactoe::{Game, Mark, Move, MoveError, Outcome, TurnState};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new, Getters)]
pub struct MatchReport {
    /// How the game ended.
    outcome: Outcome,
    /// Every move, in order.
    moves: Vec<Move>,
    /// Name of the winning player, if any.
    winner_name: Option<String>,
}

/// Runs one game between two players, writing the board to `output`.
pub struct Orchestrator<W> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    output: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator for a fresh game with `first` to move.
    pub fn new(
        first: Mark,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        output: W,
    ) -> Self {
        Self {
            game: Game::new(first),
            player_x,
            player_o,
            output,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until a line is made or the board fills.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<MatchReport> {
        info!("Starting game");

        let outcome = loop {
            write!(self.output, "{}", render_board(self.game.board()))?;
            writeln!(self.output)?;

            let mark = match self.game.state() {
                TurnState::AwaitingMove(mark) => mark,
                TurnState::Terminal(outcome) => break outcome,
            };

            let player: &mut dyn Player = match mark {
                Mark::X => self.player_x.as_mut(),
                Mark::O => self.player_o.as_mut(),
            };
            writeln!(self.output, "{}", turn_header(player.name(), mark))?;

            let mv = player
                .choose_move(&self.game)
                .with_context(|| format!("{} failed to choose a move", player.name()))?;

            match self.game.play(mv) {
                Ok(state) => debug!(player = %player.name(), %mv, ?state, "Move accepted"),
                Err(MoveError::Occupied { at, by }) if player.is_interactive() => {
                    warn!(player = %player.name(), %at, %by, "Spot taken");
                    writeln!(self.output, "Spot taken")?;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("{} played an illegal move", player.name()));
                }
            }
        };

        let winner_name = outcome.winner().map(|mark| match mark {
            Mark::X => self.player_x.name().to_string(),
            Mark::O => self.player_o.name().to_string(),
        });
        writeln!(self.output, "{}", announce(outcome, winner_name.as_deref()))?;
        self.output.flush()?;

        info!(%outcome, moves = self.game.history().len(), "Game over");
        Ok(MatchReport::new(
            outcome,
            self.game.history().to_vec(),
            winner_name,
        ))
    }
}
