//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use anyhow::Result;
use perfect_tictactoe::{Game, Move};

/// Something that can pick a move when it is its turn.
pub trait Player {
    /// Picks the next move for the game's current mark.
    fn choose_move(&mut self, game: &Game) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether an occupied cell should be answered with a re-prompt.
    ///
    /// Non-interactive players returning an occupied cell is a bug.
    fn is_interactive(&self) -> bool {
        false
    }
}
