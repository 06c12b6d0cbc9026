//! Exhaustive minimax search.
//!
//! The search scores every empty cell by playing the whole remaining game
//! tree on the caller's board. Each tentative placement is held by a
//! [`Tentative`] guard that clears the cell when dropped, so the board is
//! back to its original cells on every exit path, unwinding included.
//!
//! Scores are from the agent's point of view: `10 - depth` for an agent
//! win, `depth - 10` for an opponent win, `0` for a draw, with `depth`
//! counting plies after the candidate move. Faster wins and slower losses
//! therefore score higher.

use crate::rules::{has_winner, is_full};
use crate::{Board, Cell, Mark, Move, Outcome};
use serde::Serialize;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// A legal move and its minimax value for the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    /// The candidate move.
    #[serde(flatten)]
    pub mv: Move,
    /// Minimax value of playing it.
    pub score: i32,
}

/// Search was asked to move on a board that has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board already has a line or is full.
    #[display("Cannot search a finished game ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for SearchError {}

/// A mark placed for look-ahead. Dropping the guard empties the cell again.
struct Tentative<'a> {
    board: &'a mut Board,
    at: Move,
}

impl<'a> Tentative<'a> {
    fn place(board: &'a mut Board, at: Move, mark: Mark) -> Self {
        debug_assert!(board.is_empty_at(at), "tentative move on occupied {at}");
        board.set(at, Cell::Marked(mark));
        Self { board, at }
    }
}

impl Deref for Tentative<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Tentative<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.board.clear(self.at);
    }
}

/// Minimax value of `board` for `agent`.
///
/// `maximizing` is true when the agent is the one to place next. The board
/// is restored before returning.
pub fn minimax(board: &mut Board, agent: Mark, depth: u32, maximizing: bool) -> i32 {
    let opponent = agent.opponent();
    if has_winner(board, agent) {
        return WIN_SCORE - depth as i32;
    }
    if has_winner(board, opponent) {
        return depth as i32 - WIN_SCORE;
    }
    if is_full(board) {
        return 0;
    }

    let mover = if maximizing { agent } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for at in Move::ALL {
        if !board.is_empty_at(at) {
            continue;
        }
        let mut tentative = Tentative::place(board, at, mover);
        let score = minimax(&mut tentative, agent, depth + 1, !maximizing);
        drop(tentative);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Scores every legal move for `agent`, in row-major order.
///
/// # Errors
///
/// [`SearchError::GameOver`] if the board already has a line or is full.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &mut Board, agent: Mark) -> Result<Vec<ScoredMove>, SearchError> {
    let outcome = board.outcome();
    if outcome.is_terminal() {
        return Err(SearchError::GameOver(outcome));
    }

    let mut scored = Vec::with_capacity(9);
    for at in Move::ALL {
        if !board.is_empty_at(at) {
            continue;
        }
        let mut tentative = Tentative::place(board, at, agent);
        let score = minimax(&mut tentative, agent, 0, false);
        drop(tentative);
        scored.push(ScoredMove { mv: at, score });
    }
    Ok(scored)
}

/// Picks the best move and its score.
///
/// Ties go to the first move in row-major order: a candidate replaces the
/// current best only when it scores strictly higher.
pub fn choose_scored(board: &mut Board, agent: Mark) -> Result<ScoredMove, SearchError> {
    let mut best: Option<ScoredMove> = None;
    for candidate in evaluate(board, agent)? {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    // An in-progress board always has an empty cell.
    let best = best.ok_or(SearchError::GameOver(board.outcome()))?;
    debug!(agent = %agent, mv = %best.mv, score = best.score, "Chose move");
    Ok(best)
}

/// Picks the optimal move for `agent` on `board`.
///
/// The board is searched in place and left cell-for-cell identical.
///
/// # Errors
///
/// [`SearchError::GameOver`] if the board already has a line or is full.
pub fn choose_move(board: &mut Board, agent: Mark) -> Result<Move, SearchError> {
    choose_scored(board, agent).map(|scored| scored.mv)
}

/// A minimax player bound to one mark.
///
/// Holds nothing but the mark; every call searches from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchAgent {
    mark: Mark,
}

impl SearchAgent {
    /// Creates an agent playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// The mark this agent places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// See [`choose_move`].
    pub fn choose_move(&self, board: &mut Board) -> Result<Move, SearchError> {
        choose_move(board, self.mark)
    }

    /// See [`evaluate`].
    pub fn evaluate(&self, board: &mut Board) -> Result<Vec<ScoredMove>, SearchError> {
        evaluate(board, self.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tentative_restores_on_drop() {
        let mut board = Board::new();
        {
            let tentative = Tentative::place(&mut board, Move::new(2, 1), Mark::O);
            assert_eq!(tentative.get(Move::new(2, 1)), Cell::Marked(Mark::O));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_tentative_restores_on_unwind() {
        let mut board: Board = "X.. ... ...".parse().unwrap();
        let before = board;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _tentative = Tentative::place(&mut board, Move::new(1, 1), Mark::O);
            panic!("search aborted");
        }));
        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_leaf_scores() {
        let mut won: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(minimax(&mut won, Mark::X, 0, false), WIN_SCORE);
        assert_eq!(minimax(&mut won, Mark::O, 3, true), 3 - WIN_SCORE);

        let mut drawn: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(minimax(&mut drawn, Mark::X, 5, true), 0);
    }

    #[test]
    fn test_faster_win_scores_higher() {
        // X can win now at (0,2); every other move wins later or not at all.
        let mut board: Board = "XX. OO. ...".parse().unwrap();
        let scored = evaluate(&mut board, Mark::X).unwrap();
        let immediate = scored.iter().find(|s| s.mv == Move::new(0, 2)).unwrap();
        assert_eq!(immediate.score, WIN_SCORE);
        assert!(scored.iter().all(|s| s.score <= immediate.score));
    }

    #[test]
    fn test_search_refuses_finished_board() {
        let mut board: Board = "OOO XX. X..".parse().unwrap();
        assert_eq!(
            choose_move(&mut board, Mark::X),
            Err(SearchError::GameOver(Outcome::Won(Mark::O)))
        );

        let mut full: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(
            SearchAgent::new(Mark::O).choose_move(&mut full),
            Err(SearchError::GameOver(Outcome::Draw))
        );
    }

    #[test]
    fn test_last_cell() {
        let mut board: Board = "XOX XOO OX.".parse().unwrap();
        let best = choose_scored(&mut board, Mark::X).unwrap();
        assert_eq!(best.mv, Move::new(2, 2));
        assert_eq!(best.score, 0);
    }
}
