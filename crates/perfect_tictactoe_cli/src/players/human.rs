//! Human player reading coordinates from a line-based input.

use super::Player;
use anyhow::{Context, Result};
use perfect_tictactoe::{Game, Move};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Human player answering `col:` and `row:` prompts with 1-3.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Prompts until a number in 1..=3 is entered; returns it 0-based.
    fn read_coordinate(&mut self, prompt: &str) -> Result<usize> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read player input")?;
            if read == 0 {
                anyhow::bail!("Input closed");
            }

            match line.trim().parse::<usize>() {
                Ok(n @ 1..=3) => return Ok(n - 1),
                _ => {
                    warn!(input = %line.trim(), "Rejected coordinate");
                    writeln!(self.output, "Invalid input")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, _game: &Game) -> Result<Move> {
        let col = self.read_coordinate("col: ")?;
        let row = self.read_coordinate("row: ")?;
        let mv = Move::try_new(row, col)?;
        debug!(player = %self.name, %mv, "Human chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_column_then_row() {
        let mut human = HumanPlayer::new("Ann", Cursor::new("3\n1\n"), Vec::new());
        let mv = human.choose_move(&Game::default()).unwrap();
        assert_eq!(mv, Move::new(0, 2));
        assert_eq!(String::from_utf8(human.output).unwrap(), "col: row: ");
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let input = Cursor::new("abc\n0\n4\n2\n\n2\n");
        let mut human = HumanPlayer::new("Ann", input, Vec::new());
        let mv = human.choose_move(&Game::default()).unwrap();
        assert_eq!(mv, Move::new(1, 1));

        let output = String::from_utf8(human.output).unwrap();
        assert_eq!(output.matches("Invalid input").count(), 4);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut human = HumanPlayer::new("Ann", Cursor::new("2\n"), Vec::new());
        let err = human.choose_move(&Game::default()).unwrap_err();
        assert!(err.to_string().contains("Input closed"));
    }
}
