//! Alternating turn invariant: players take turns starting with the first player.

use super::super::GameState;
use super::Invariant;

/// Invariant: moves alternate between players, and the marker counts agree.
///
/// The first player owns every even-numbered move and the opponent every
/// odd-numbered one, so the first player has either as many markers on
/// the board as the opponent or exactly one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let first = game.first_player();
        let alternates = game.history().iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { first } else { first.opponent() };
            mov.player == expected
        });

        let len = game.history().len();
        let counts_match = game.board().count(first) == len.div_ceil(2)
            && game.board().count(first.opponent()) == len / 2;

        alternates && counts_match
    }

    fn description() -> &'static str {
        "Players alternate, starting with the first player"
    }
}
