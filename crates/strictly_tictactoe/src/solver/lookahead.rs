//! One-ply lookahead used by the medium solver.

use super::super::rules;
use super::super::{GameState, Position};

/// How a candidate looks one ply ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Outlook {
    /// Playing here ends the game with a win or a draw.
    Finishing,
    /// The opponent would win by playing here, so taking it blocks them.
    Blocking,
    /// Neither of the above.
    Neutral,
}

/// Classifies the candidate `pos` for the player to move.
///
/// The mover's own check plays the move, evaluates, and takes it back.
/// The opponent's check only asks whether their marker at `pos` would
/// fill a line; nothing deeper is searched.
pub(crate) fn classify(state: &mut GameState, pos: Position) -> Outlook {
    state.place(pos);
    let finishing = rules::evaluate(state, pos).is_terminal();
    state.reverse(pos);

    if finishing {
        Outlook::Finishing
    } else if rules::completes_line(state.board(), pos, state.to_move().opponent()) {
        Outlook::Blocking
    } else {
        Outlook::Neutral
    }
}

/// Splits candidates into finishing, blocking and neutral buckets.
pub(crate) fn buckets(state: &mut GameState, candidates: &[Position]) -> [Vec<Position>; 3] {
    let mut buckets: [Vec<Position>; 3] = Default::default();
    for &pos in candidates {
        let slot = match classify(state, pos) {
            Outlook::Finishing => 0,
            Outlook::Blocking => 1,
            Outlook::Neutral => 2,
        };
        buckets[slot].push(pos);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[Position]) -> GameState {
        let mut state = GameState::new();
        for &pos in moves {
            state.apply(pos).unwrap();
        }
        state
    }

    #[test]
    fn test_classify_win_block_neutral() {
        // X: TopLeft, TopCenter. O: MiddleLeft, Center. X to move.
        let mut state = play(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ]);
        let before = state.clone();

        assert_eq!(classify(&mut state, Position::TopRight), Outlook::Finishing);
        assert_eq!(classify(&mut state, Position::MiddleRight), Outlook::Blocking);
        assert_eq!(classify(&mut state, Position::BottomCenter), Outlook::Neutral);
        assert_eq!(state, before);
    }

    #[test]
    fn test_last_cell_is_finishing() {
        let mut state = play(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
        ]);
        assert_eq!(classify(&mut state, Position::BottomRight), Outlook::Finishing);
    }

    #[test]
    fn test_buckets_partition_candidates() {
        let mut state = play(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ]);
        let candidates = state.candidates();
        let [finishing, blocking, neutral] = buckets(&mut state, &candidates);
        assert_eq!(finishing, vec![Position::TopRight]);
        assert_eq!(blocking, vec![Position::MiddleRight]);
        assert_eq!(finishing.len() + blocking.len() + neutral.len(), candidates.len());
    }
}
