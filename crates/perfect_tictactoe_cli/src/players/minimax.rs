//! Perfect-play agent backed by the minimax search.

use super::Player;
use anyhow::{Context, Result};
use perfect_tictactoe::{Game, Mark, Move, SearchAgent};
use tracing::{debug, instrument};

/// Agent that always plays a minimax-optimal move.
pub struct MinimaxPlayer {
    name: String,
    agent: SearchAgent,
}

impl MinimaxPlayer {
    /// Creates an agent playing `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            agent: SearchAgent::new(mark),
        }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip_all, fields(agent = %self.name, mark = %self.agent.mark()))]
    fn choose_move(&mut self, game: &Game) -> Result<Move> {
        if game.to_move() != Some(self.agent.mark()) {
            anyhow::bail!("Not {}'s turn", self.agent.mark());
        }

        // Search a copy so the live game is never borrowed mutably.
        let mut scratch = *game.board();
        let mv = self
            .agent
            .choose_move(&mut scratch)
            .context("Agent could not choose a move")?;
        debug!(%mv, "Agent chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
