//! Win detection logic for tic-tac-toe.
//!
//! Only the lines through a given cell are inspected: its row, its column,
//! and whichever diagonals it actually lies on.

use super::super::{Board, Player, Position, Square};

/// Returns the lines (as cell triples) that pass through `pos`.
///
/// Always the row and the column; the main diagonal only when
/// `row == col`, the anti-diagonal only when `row + col == 2`.
pub fn lines_through(pos: Position) -> impl Iterator<Item = [Position; 3]> {
    let (row, col) = (pos.row(), pos.col());
    let cell = |r: usize, c: usize| Position::ALL[r * 3 + c];

    let row_line = Some([cell(row, 0), cell(row, 1), cell(row, 2)]);
    let col_line = Some([cell(0, col), cell(1, col), cell(2, col)]);
    let main = pos
        .on_main_diagonal()
        .then(|| [cell(0, 0), cell(1, 1), cell(2, 2)]);
    let anti = pos
        .on_anti_diagonal()
        .then(|| [cell(0, 2), cell(1, 1), cell(2, 0)]);

    [row_line, col_line, main, anti].into_iter().flatten()
}

/// Checks whether `player` holding `pos` would fill a line through `pos`.
///
/// The square at `pos` itself is treated as `player`'s, whatever it holds,
/// so this answers both "did that move win?" and "would that move win?".
pub fn completes_line(board: &Board, pos: Position, player: Player) -> bool {
    lines_through(pos).any(|line| {
        line.iter()
            .all(|&cell| cell == pos || board.get(cell) == Square::Occupied(player))
    })
}

/// Returns the player who owns a complete line through `pos`, if any.
pub fn winner_through(board: &Board, pos: Position) -> Option<Player> {
    match board.get(pos) {
        Square::Occupied(player) if completes_line(board, pos, player) => Some(player),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_corner_has_three_lines() {
        assert_eq!(lines_through(Position::TopLeft).count(), 3);
        assert_eq!(lines_through(Position::BottomLeft).count(), 3);
    }

    #[test]
    fn test_edge_has_two_lines() {
        assert_eq!(lines_through(Position::TopCenter).count(), 2);
        assert_eq!(lines_through(Position::MiddleRight).count(), 2);
    }

    #[test]
    fn test_center_has_four_lines() {
        assert_eq!(lines_through(Position::Center).count(), 4);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(winner_through(&board, Position::TopRight), Some(Player::X));
        assert_eq!(winner_through(&board, Position::TopLeft), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(winner_through(&board, Position::Center), Some(Player::O));
    }

    #[test]
    fn test_main_diagonal_cell_ignores_anti_diagonal() {
        // Anti-diagonal is complete, but TopLeft is not on it.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(winner_through(&board, Position::TopLeft), None);
        assert_eq!(winner_through(&board, Position::BottomLeft), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::O),
        ]);
        assert_eq!(winner_through(&board, Position::TopCenter), None);
        assert_eq!(winner_through(&board, Position::Center), None);
    }

    #[test]
    fn test_completes_line_hypothetical() {
        let board = board_with(&[
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
        ]);
        assert!(completes_line(&board, Position::MiddleRight, Player::O));
        assert!(!completes_line(&board, Position::MiddleRight, Player::X));
        assert!(!completes_line(&board, Position::TopRight, Player::O));
    }
}
