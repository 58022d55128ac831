//! Draw detection logic for tic-tac-toe.

use super::super::Board;

/// Number of moves that fills the board.
pub const MAX_MOVES: usize = 9;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no line through the last move is a draw.
pub fn is_full(board: &Board) -> bool {
    board.occupied() == MAX_MOVES
}
