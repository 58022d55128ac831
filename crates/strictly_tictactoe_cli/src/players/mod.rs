//! Player trait and implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use anyhow::Result;
use strictly_tictactoe::{GameState, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The game is borrowed mutably so a computer player can search it;
    /// it must be left unchanged. The returned position is range-checked
    /// but may still be occupied; the caller rejects that and asks again.
    fn get_move(&mut self, game: &mut GameState, console: &mut dyn Console) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
