//! History consistency invariant: history matches the occupied squares.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every history entry owns its square, and nothing else is occupied.
///
/// History length equals the number of occupied squares, and each
/// recorded move's square holds that move's marker.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let entries_match = game
            .history()
            .iter()
            .all(|mov| game.board().get(mov.position) == Square::Occupied(mov.player));

        entries_match && game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}
