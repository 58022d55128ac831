//! Terminal input and board rendering.
//!
//! The engine never prints. Everything the player sees goes through a
//! [`Console`], so the game loop can run against a real terminal, an
//! in-memory script, or nothing at all.

use anyhow::{Context, Result};
use crossterm::style::{StyledContent, Stylize};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, GameStatus, Player, Position, Square};

const DASHED_LINE: &str = "-------------";

/// Where prompts are answered and the board is drawn.
pub trait Console {
    /// Shows `prompt` and reads one trimmed line. `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Prints a line of text.
    fn say(&mut self, message: &str) -> Result<()>;

    /// Draws the board after a state change.
    fn render_board(&mut self, board: &Board) -> Result<()>;

    /// Announces how the game ended.
    fn announce(&mut self, status: GameStatus) -> Result<()>;
}

/// Paints a marker in its player's colour.
pub fn styled_mark(player: Player) -> StyledContent<&'static str> {
    match player {
        Player::X => "X".red(),
        Player::O => "O".blue(),
    }
}

/// Renders the board as text, one bordered row per line.
///
/// Empty cells show their placeholder number so players know what to type.
pub fn board_text(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(DASHED_LINE);
    out.push('\n');
    for row in Position::ALL.chunks(3) {
        out.push_str("| ");
        for &pos in row {
            match board.get(pos) {
                Square::Empty => out.push_str(&pos.placeholder().to_string()),
                Square::Occupied(player) => out.push_str(&styled_mark(player).to_string()),
            }
            out.push_str(" | ");
        }
        out.push('\n');
        out.push_str(DASHED_LINE);
        out.push('\n');
    }
    out
}

/// Text shown when a game ends.
pub fn outcome_text(status: GameStatus) -> String {
    match status {
        GameStatus::Won(player) => format!("{} wins", styled_mark(player)),
        GameStatus::Draw => "Draw".yellow().to_string(),
        GameStatus::InProgress => "Game abandoned".to_string(),
    }
}

/// Console backed by a reader and a writer, normally stdin and stdout.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn render_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", board_text(board))?;
        writeln!(self.output)?;
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> Result<()> {
        writeln!(self.output, "{}", outcome_text(status))?;
        Ok(())
    }
}

/// Console that shows nothing and has no input, for computer-only matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Console for Silent {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn say(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }

    fn render_board(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn announce(&mut self, _status: GameStatus) -> Result<()> {
        Ok(())
    }
}
