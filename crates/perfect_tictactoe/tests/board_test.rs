//! Tests for board mutation and line detection.

use perfect_tictactoe::{Board, Cell, Game, Mark, Move, Outcome, PlaceError, TurnState, LINES};

/// Every board reachable by alternating play from an empty board, X first.
fn reachable_boards() -> Vec<Board> {
    fn walk(game: &Game, out: &mut Vec<Board>) {
        out.push(*game.board());
        if game.to_move().is_none() {
            return;
        }
        for at in game.board().empty_cells() {
            let mut next = game.clone();
            next.play(at).unwrap();
            walk(&next, out);
        }
    }

    let mut boards = Vec::new();
    walk(&Game::new(Mark::X), &mut boards);
    boards.sort_by_key(|b| b.cells().map(|c| c.symbol()));
    boards.dedup();
    boards
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct legal positions, empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_occupied_cell_rejected_everywhere() {
    for board in reachable_boards() {
        for at in Move::ALL {
            let Cell::Marked(by) = board.get(at) else {
                continue;
            };
            for mark in [Mark::X, Mark::O] {
                let mut copy = board;
                assert_eq!(copy.place_mark(at, mark), Err(PlaceError { at, by }));
                assert_eq!(copy, board, "board changed after rejected move at {at}");
            }
        }
    }
}

#[test]
fn test_each_line_detected() {
    for line in LINES {
        let mut board = Board::new();
        for at in line {
            board.place_mark(at, Mark::O).unwrap();
        }
        assert_eq!(board.has_line(), Some(Mark::O));
        assert_eq!(board.outcome(), Outcome::Won(Mark::O));
    }
}

#[test]
fn test_no_line_without_three_in_a_row() {
    for board in reachable_boards() {
        let expected = LINES.iter().any(|line| {
            let first = board.get(line[0]);
            first != Cell::Empty && line.iter().all(|at| board.get(*at) == first)
        });
        assert_eq!(board.has_line().is_some(), expected, "\n{board}");
    }
}

#[test]
fn test_outcome_matches_turn_state() {
    let mut game = Game::new(Mark::X);
    for at in [Move::new(1, 1), Move::new(0, 0), Move::new(2, 2)] {
        let state = game.play(at).unwrap();
        assert_eq!(state, TurnState::AwaitingMove(game.to_move().unwrap()));
        assert_eq!(game.outcome(), Outcome::InProgress);
    }
}
