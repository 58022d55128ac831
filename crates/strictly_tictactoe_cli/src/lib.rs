//! Terminal driver for strictly_tictactoe.
//!
//! The engine crate holds every rule and the solver; this crate only
//! reads moves, draws the board and loops over games.
//!
//! # Architecture
//!
//! - **Console**: input prompts and board rendering
//! - **Players**: human (typed cell numbers) and computer (solver)
//! - **Orchestrator**: the game loop, plus computer-only matches
//! - **Session**: back-to-back interactive games

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod orchestrator;
pub mod players;
pub mod session;

pub use config::{ConfigError, ConfigOverrides, GameConfig, Opponent};
pub use console::{Console, Silent, Terminal};
pub use orchestrator::{MatchTally, Orchestrator, run_match};
pub use players::{AiPlayer, HumanPlayer, Player};
pub use session::{Setup, run_session};
