//! Turn state machine for a single game.
//!
//! `AwaitingMove(mark)` moves to `AwaitingMove(mark.opponent())` after a
//! successful placement that leaves the board in progress, otherwise to
//! `Terminal(outcome)`. Terminal states accept nothing.

use super::action::{Move, MoveError};
use super::board::{Board, PlaceError};
use super::types::{Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a game stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for this mark to move.
    AwaitingMove(Mark),
    /// Game over.
    Terminal(Outcome),
}

impl TurnState {
    /// The mark to move, if the game is still running.
    pub fn to_move(&self) -> Option<Mark> {
        match self {
            TurnState::AwaitingMove(mark) => Some(*mark),
            TurnState::Terminal(_) => None,
        }
    }
}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        MoveError::Occupied {
            at: err.at,
            by: err.by,
        }
    }
}

/// One game from empty board to outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    state: TurnState,
    first: Mark,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game on an empty board with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            state: TurnState::AwaitingMove(first),
            first,
            history: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that opened the game.
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The mark to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        self.state.to_move()
    }

    /// The outcome, derived from the board.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Places the current mark at `at` and advances the state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is terminal
    /// - [`MoveError::Occupied`] if the cell is taken; the game is unchanged
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn play(&mut self, at: Move) -> Result<TurnState, MoveError> {
        let mover = match self.state {
            TurnState::AwaitingMove(mark) => mark,
            TurnState::Terminal(_) => return Err(MoveError::GameOver),
        };

        self.board.place_mark(at, mover)?;
        self.history.push(at);

        self.state = match self.board.outcome() {
            Outcome::InProgress => TurnState::AwaitingMove(mover.opponent()),
            outcome => {
                info!(%outcome, moves = self.history.len(), "Game finished");
                TurnState::Terminal(outcome)
            }
        };
        debug_assert!(self.marks_balanced(), "marks out of balance:\n{}", self.board);
        debug!(mark = %mover, %at, "Move applied");

        Ok(self.state)
    }

    /// Rebuilds a game by replaying `moves` from an empty board.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first: Mark, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new(first);
        for at in moves {
            game.play(*at)?;
        }
        Ok(game)
    }

    /// The opening mark has placed as many marks as the other, or one more.
    fn marks_balanced(&self) -> bool {
        let first = self.board.count(self.first);
        let second = self.board.count(self.first.opponent());
        first == second || first == second + 1
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Mark::O);
        assert_eq!(game.to_move(), Some(Mark::O));
        assert_eq!(
            game.play(Move::new(1, 1)),
            Ok(TurnState::AwaitingMove(Mark::X))
        );
        assert_eq!(game.to_move(), Some(Mark::X));
        assert_eq!(game.history(), &[Move::new(1, 1)]);
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut game = Game::default();
        game.play(Move::new(0, 0)).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play(Move::new(0, 0)),
            Err(MoveError::Occupied {
                at: Move::new(0, 0),
                by: Mark::X
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_is_terminal() {
        let moves = [
            Move::new(0, 0),
            Move::new(1, 1),
            Move::new(0, 1),
            Move::new(2, 0),
        ];
        let mut game = Game::replay(Mark::X, &moves).unwrap();
        assert_eq!(
            game.play(Move::new(0, 2)),
            Ok(TurnState::Terminal(Outcome::Won(Mark::X)))
        );
        assert_eq!(game.to_move(), None);
        assert_eq!(game.play(Move::new(2, 2)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_is_draw() {
        // X O X / X O O / O X X
        let moves = [
            Move::new(0, 0),
            Move::new(0, 1),
            Move::new(0, 2),
            Move::new(1, 1),
            Move::new(1, 0),
            Move::new(1, 2),
            Move::new(2, 1),
            Move::new(2, 0),
            Move::new(2, 2),
        ];
        let game = Game::replay(Mark::X, &moves).unwrap();
        assert_eq!(game.state(), TurnState::Terminal(Outcome::Draw));
        assert_eq!(game.board().to_string(), "XOX\nXOO\nOXX");
    }
}
