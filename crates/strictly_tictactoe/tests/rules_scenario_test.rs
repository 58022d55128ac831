//! Move-by-move scenarios for win and draw detection.

use strictly_tictactoe::{GameState, GameStatus, MoveError, Player, Position, rules};

fn at(row: usize, col: usize) -> Position {
    Position::at(row, col).unwrap()
}

#[test]
fn test_row_zero_win_for_x() {
    let mut game = strictly_tictactoe::new_game();
    let moves = [(0, 0), (1, 1), (0, 1), (2, 2)];
    for (row, col) in moves {
        game.apply(at(row, col)).unwrap();
        assert_eq!(rules::evaluate(&game, at(row, col)), GameStatus::InProgress);
    }

    game.apply(at(0, 2)).unwrap();
    assert_eq!(rules::evaluate(&game, at(0, 2)), GameStatus::Won(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let order = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    let mut game = GameState::new();
    for (i, (row, col)) in order.into_iter().enumerate() {
        game.apply(at(row, col)).unwrap();
        let expected = if i == 8 {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        assert_eq!(rules::evaluate(&game, at(row, col)), expected, "after move {}", i + 1);
    }
    assert!(game.candidates().is_empty());
    assert_eq!(game.occupied_count(), 9);
}

#[test]
fn test_ninth_move_win_beats_draw() {
    // X completes the main diagonal with the last cell on the board.
    let order = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (2, 0),
        (1, 2),
        (2, 1),
        (2, 2),
    ];
    let mut game = GameState::new();
    for (row, col) in order {
        game.apply(at(row, col)).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_win_reported_only_through_completing_move() {
    // O completes the middle column; earlier X cells see no line.
    let order = [(0, 0), (0, 1), (2, 2), (1, 1), (2, 0), (2, 1)];
    let mut game = GameState::new();
    for (row, col) in order {
        game.apply(at(row, col)).unwrap();
    }

    assert_eq!(rules::evaluate(&game, at(2, 1)), GameStatus::Won(Player::O));
    assert_eq!(rules::evaluate(&game, at(1, 1)), GameStatus::Won(Player::O));
    // Cells off the column do not report the win.
    assert_eq!(rules::evaluate(&game, at(1, 0)), GameStatus::InProgress);
    assert_eq!(rules::evaluate(&game, at(0, 0)), GameStatus::InProgress);
}

#[test]
fn test_main_diagonal_move_does_not_claim_anti_diagonal() {
    // X owns the anti-diagonal; the corner (0,0) is only on the main one.
    let order = [(0, 2), (0, 1), (1, 1), (1, 2), (2, 0)];
    let mut game = GameState::new();
    for (row, col) in order {
        game.apply(at(row, col)).unwrap();
    }
    assert_eq!(rules::evaluate(&game, at(2, 0)), GameStatus::Won(Player::X));
    assert!(!rules::completes_line(game.board(), at(0, 0), Player::X));
}

#[test]
fn test_occupied_cell_is_recoverable() {
    let mut game = GameState::new();
    game.apply(at(1, 1)).unwrap();
    let err = game.apply(at(1, 1)).unwrap_err();
    assert_eq!(err, MoveError::CellOccupied(Position::Center));
    assert!(err.to_string().contains("occupied"));

    // The same player simply tries again.
    assert_eq!(game.to_move(), Player::O);
    game.apply(at(0, 0)).unwrap();
    assert_eq!(game.occupied_count(), 2);
}

#[test]
fn test_history_serializes() {
    let mut game = GameState::new();
    game.apply(Position::Center).unwrap();
    let json = serde_json::to_string(game.history()).unwrap();
    assert_eq!(json, r#"[{"player":"X","position":"Center"}]"#);
}
