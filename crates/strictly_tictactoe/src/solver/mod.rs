//! Computer opponent with three strength tiers.
//!
//! - `Easy` picks uniformly at random.
//! - `Medium` looks one ply ahead: finish the game if it can, otherwise
//!   block an immediate opponent win, otherwise play at random.
//! - `Hard` runs a full minimax and never loses.
//!
//! The solver owns only its random source. It borrows the live game state
//! mutably while searching and leaves it exactly as it found it.

mod lookahead;
pub mod minimax;

pub use minimax::{DRAW, LOSS, WIN, minimax};

use super::{GameState, Position};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Strength of the computer opponent.
///
/// Parses from its name (case-insensitive) or from the menu numbers 1-3.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Random moves.
    #[strum(to_string = "easy", serialize = "1")]
    Easy,
    /// One-ply lookahead.
    #[strum(to_string = "medium", serialize = "2")]
    Medium,
    /// Full minimax.
    #[default]
    #[strum(to_string = "hard", serialize = "3")]
    Hard,
}

/// Move picker backed by an injected random source.
#[derive(Debug, Clone)]
pub struct Solver<R = ChaCha8Rng> {
    rng: R,
}

impl Solver<ChaCha8Rng> {
    /// Creates a deterministic solver from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a solver seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Solver<R> {
    /// Creates a solver that draws its randomness from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a move for the player to move.
    ///
    /// Returns `None` when the game is over or no cell is empty.
    #[instrument(skip(self, state), fields(moves = state.occupied_count()))]
    pub fn choose_move(&mut self, state: &mut GameState, difficulty: Difficulty) -> Option<Position> {
        let candidates = state.candidates();
        self.choose_from(state, &candidates, difficulty)
    }

    /// Picks one of `candidates` for the player to move.
    ///
    /// Occupied cells are dropped from `candidates` before searching.
    /// Returns `None` when the game is over or none of them is empty.
    pub fn choose_from(
        &mut self,
        state: &mut GameState,
        candidates: &[Position],
        difficulty: Difficulty,
    ) -> Option<Position> {
        if state.status().is_terminal() {
            debug!("No move to choose in a finished game");
            return None;
        }
        let open: Vec<Position> = candidates
            .iter()
            .copied()
            .filter(|&pos| state.is_cell_empty(pos))
            .collect();
        if open.len() < candidates.len() {
            warn!(
                dropped = candidates.len() - open.len(),
                "Ignoring occupied candidate cells"
            );
        }

        let choice = match difficulty {
            Difficulty::Easy => self.pick(&open),
            Difficulty::Medium => self.lookahead(state, &open),
            Difficulty::Hard => self.exhaustive(state, &open),
        };
        debug!(%difficulty, player = %state.to_move(), choice = ?choice, "Solver chose move");
        choice
    }

    fn pick(&mut self, candidates: &[Position]) -> Option<Position> {
        candidates.choose(&mut self.rng).copied()
    }

    fn lookahead(&mut self, state: &mut GameState, candidates: &[Position]) -> Option<Position> {
        let buckets = lookahead::buckets(state, candidates);
        let bucket = buckets.iter().find(|bucket| !bucket.is_empty())?;
        self.pick(bucket)
    }

    fn exhaustive(&mut self, state: &mut GameState, candidates: &[Position]) -> Option<Position> {
        match state.occupied_count() {
            // Every opening leads to a draw under perfect play.
            0 => self.pick(candidates),
            8 => candidates.first().copied(),
            _ => minimax::best_move(state, candidates),
        }
    }
}
