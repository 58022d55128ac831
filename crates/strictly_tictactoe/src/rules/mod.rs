//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can call them on a live, temporarily
//! mutated state.

pub mod draw;
pub mod win;

pub use draw::{MAX_MOVES, is_full};
pub use win::{completes_line, lines_through, winner_through};

use super::{GameState, GameStatus, Position};

/// Evaluates the game after a move at `pos`.
///
/// Reports `Won` only when a line through `pos` is filled by the player
/// who moved last. Otherwise a full board is a `Draw`, and anything else
/// is still `InProgress`.
pub fn evaluate(state: &GameState, pos: Position) -> GameStatus {
    let board = state.board();
    if let Some(mover) = state.last_mover()
        && winner_through(board, pos) == Some(mover)
    {
        return GameStatus::Won(mover);
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
