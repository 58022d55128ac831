//! Strictly Tic-Tac-Toe - pure game logic with a computer opponent.
//!
//! # Architecture
//!
//! - **State**: board, turn and move history ([`GameState`])
//! - **Rules**: win and draw detection through the last move ([`rules`])
//! - **Moves**: apply and reverse, the backbone of the search
//! - **Solver**: easy, medium and hard move selection ([`Solver`])
//!
//! Rendering and input belong to the driver; nothing here prints.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Difficulty, GameState, GameStatus, Position, Solver};
//!
//! let mut game = GameState::new();
//! let mut solver = Solver::seeded(42);
//!
//! while game.status() == GameStatus::InProgress {
//!     let pos = solver.choose_move(&mut game, Difficulty::Hard).unwrap();
//!     game.apply(pos).unwrap();
//! }
//!
//! // Perfect play on both sides always draws.
//! assert_eq!(game.status(), GameStatus::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
pub mod rules;
pub mod solver;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use solver::{Difficulty, Solver};
pub use state::GameState;
pub use types::{Board, GameStatus, Player, Square};

/// Starts a fresh game with X to move.
pub fn new_game() -> GameState {
    GameState::new()
}
