//! Apply followed by reverse restores the exact previous state.

use proptest::prelude::*;
use strictly_tictactoe::{GameState, GameStatus, Player, Position};

/// A random order of all nine cells plus how many of them to play first.
fn game_line() -> impl Strategy<Value = (Vec<usize>, usize)> {
    (Just((0..9).collect::<Vec<usize>>()).prop_shuffle(), 0..9usize)
}

/// Plays cells in order until `count` moves are made or the game ends.
fn replay(order: &[usize], count: usize, first: Player) -> GameState {
    let mut game = GameState::with_first_player(first);
    for &index in order.iter().take(count) {
        if game.status() != GameStatus::InProgress {
            break;
        }
        game.apply(Position::from_index(index).unwrap()).unwrap();
    }
    game
}

proptest! {
    #[test]
    fn test_apply_reverse_round_trip((order, count) in game_line(), o_first in any::<bool>()) {
        let first = if o_first { Player::O } else { Player::X };
        let mut game = replay(&order, count, first);
        prop_assume!(game.status() == GameStatus::InProgress);

        let before = game.clone();
        for pos in game.candidates() {
            game.apply(pos).unwrap();
            prop_assert_eq!(game.occupied_count(), before.occupied_count() + 1);
            game.reverse(pos);

            prop_assert_eq!(&game, &before);
            prop_assert_eq!(game.to_move(), before.to_move());
            prop_assert_eq!(game.history(), before.history());
        }
    }

    #[test]
    fn test_unwinding_returns_to_empty_board((order, count) in game_line()) {
        let mut game = replay(&order, count, Player::X);
        while let Some(last) = game.last_move() {
            game.reverse(last.position);
        }
        prop_assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_history_matches_occupied_cells((order, count) in game_line()) {
        let game = replay(&order, count, Player::X);
        prop_assert!(game.occupied_count() <= 9);
        prop_assert_eq!(game.occupied_count(), game.board().occupied());
        prop_assert_eq!(game.candidates().len(), 9 - game.occupied_count());
    }
}
