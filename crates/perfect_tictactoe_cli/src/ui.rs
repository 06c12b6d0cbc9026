//! Text rendering for the console.

use perfect_tictactoe::{Board, Cell, Mark, Move, Outcome};

/// Renders the board with 1-based row and column labels.
///
/// ```text
///    1   2   3
/// 1  X | O |
///   ---+---+---
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   1   2   3\n");
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| match board.get(Move::new(row, col)) {
                Cell::Empty => " ".to_string(),
                Cell::Marked(mark) => mark.to_string(),
            })
            .collect();
        out.push_str(&format!("{}  {}\n", row + 1, cells.join(" | ")));
        if row < 2 {
            out.push_str("  ---+---+---\n");
        }
    }
    out
}

/// End-of-game line.
pub fn announce(outcome: Outcome, winner_name: Option<&str>) -> String {
    match (outcome, winner_name) {
        (Outcome::Won(mark), Some(name)) => format!("{} wins ({})", name, mark),
        (Outcome::Won(mark), None) => format!("{} wins", mark),
        (Outcome::Draw, _) => "Tied".to_string(),
        (Outcome::InProgress, _) => "Game in progress".to_string(),
    }
}

/// One-line header before a player moves.
pub(crate) fn turn_header(name: &str, mark: Mark) -> String {
    format!("{}'s turn ({})", name, mark)
}
