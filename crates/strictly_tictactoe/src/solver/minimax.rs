//! Exhaustive win/draw/loss minimax.
//!
//! The tree is at most nine plies deep, so every line is played out to the
//! end and no heuristic evaluation or pruning is needed. Scores are from
//! the point of view of the player making the move being scored.

use super::super::action::MoveError;
use super::super::rules;
use super::super::{GameState, GameStatus, Position};

/// The mover can force a win.
pub const WIN: i8 = 1;
/// Best play from both sides ends in a draw.
pub const DRAW: i8 = 0;
/// The opponent can force a win.
pub const LOSS: i8 = -1;

/// Scores the move at `pos` for the player to move.
///
/// The state is identical to its input when this returns.
///
/// # Errors
///
/// Returns the same errors as [`GameState::apply`] if the move is illegal.
pub fn minimax(state: &mut GameState, pos: Position) -> Result<i8, MoveError> {
    if state.status().is_terminal() {
        return Err(MoveError::GameOver);
    }
    if !state.is_cell_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }
    Ok(search(state, pos))
}

/// Plays `pos`, scores it, and takes it back.
///
/// A finished game scores `DRAW` or `WIN` (only the mover can have just
/// completed a line). Otherwise the opponent picks the reply that is
/// worst for us, so the score is the minimum of the negated reply scores.
pub(crate) fn search(state: &mut GameState, pos: Position) -> i8 {
    state.place(pos);
    let score = match rules::evaluate(state, pos) {
        GameStatus::Draw => DRAW,
        GameStatus::Won(_) => WIN,
        GameStatus::InProgress => state
            .candidates()
            .into_iter()
            .map(|reply| -search(state, reply))
            .fold(WIN, i8::min),
    };
    state.reverse(pos);
    score
}

/// Picks the highest-scoring candidate, stopping at the first forced win.
///
/// Ties keep the earliest candidate.
pub(crate) fn best_move(state: &mut GameState, candidates: &[Position]) -> Option<Position> {
    let mut best = *candidates.first()?;
    let mut best_score = LOSS;

    for &pos in candidates {
        let score = search(state, pos);
        if score == WIN {
            return Some(pos);
        }
        if score > best_score {
            best = pos;
            best_score = score;
        }
    }

    Some(best)
}
