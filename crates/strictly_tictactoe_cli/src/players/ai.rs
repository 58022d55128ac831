//! Computer player backed by the solver.

use super::Player;
use crate::console::Console;
use anyhow::Result;
use std::time::Duration;
use strictly_tictactoe::{Difficulty, GameState, Position, Solver};
use tracing::{debug, instrument};

/// Computer player at a fixed difficulty.
pub struct AiPlayer {
    name: String,
    difficulty: Difficulty,
    solver: Solver,
    think_delay: Duration,
}

impl AiPlayer {
    /// Creates a computer player.
    ///
    /// A seed makes its random choices repeatable.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, difficulty: Difficulty, seed: Option<u64>) -> Self {
        let solver = match seed {
            Some(seed) => Solver::seeded(seed),
            None => Solver::from_entropy(),
        };
        Self {
            name: name.as_ref().to_string(),
            difficulty,
            solver,
            think_delay: Duration::ZERO,
        }
    }

    /// Pauses for `delay` before every move.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }
}

impl Player for AiPlayer {
    fn get_move(&mut self, game: &mut GameState, console: &mut dyn Console) -> Result<Position> {
        if !self.think_delay.is_zero() {
            console.say("AI is making a move...")?;
            std::thread::sleep(self.think_delay);
        }

        let Some(pos) = self.solver.choose_move(game, self.difficulty) else {
            anyhow::bail!("{} has no move to make", self.name);
        };
        debug!(ai = %self.name, position = %pos, "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
