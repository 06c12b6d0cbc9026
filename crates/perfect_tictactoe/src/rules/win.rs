//! Win detection logic for tic-tac-toe.

use super::LINES;
use crate::{Board, Cell, Mark};

/// Returns the mark of the first completed line in table order.
///
/// Boards with several completed lines are not rejected.
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Marked(mark) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some(mark);
        }
    }

    None
}

/// Checks whether `mark` has completed any line.
pub fn has_winner(board: &Board, mark: Mark) -> bool {
    let target = Cell::Marked(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|at| board.get(*at) == target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    fn board_with(cells: &[Move], mark: Mark) -> Board {
        let mut board = Board::new();
        for at in cells {
            board.place_mark(*at, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!has_winner(&board, Mark::X));
        assert!(!has_winner(&board, Mark::O));
    }

    #[test]
    fn test_every_line_wins_alone() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(&line, mark);
                assert_eq!(winner(&board), Some(mark), "line {:?}", line);
                assert!(has_winner(&board, mark));
                assert!(!has_winner(&board, mark.opponent()));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[Move::new(0, 0), Move::new(0, 1)], Mark::X);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO ... ...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_two_lines_reports_first_in_table_order() {
        // Unreachable in real play; reported without complaint.
        let board: Board = "OOO XXX ...".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
        assert!(has_winner(&board, Mark::X));
    }
}
