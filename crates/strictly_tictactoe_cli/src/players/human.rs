//! Human player that types cell numbers.

use super::Player;
use crate::console::Console;
use anyhow::Result;
use strictly_tictactoe::{GameState, Position};
use tracing::debug;

/// Human player reading moves from the console.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, _game: &mut GameState, console: &mut dyn Console) -> Result<Position> {
        loop {
            let Some(line) = console.read_line("Please make your move [1-9]: ")? else {
                anyhow::bail!("Input closed before {} moved", self.name);
            };

            match Position::from_label_or_number(&line) {
                Some(pos) => {
                    debug!(player = %self.name, position = %pos, "Human chose position");
                    return Ok(pos);
                }
                None => console.say("Invalid input.")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
