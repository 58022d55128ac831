//! Command-line interface for the tic-tac-toe driver.

use crate::config::{ConfigOverrides, Opponent};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Difficulty;

/// Strictly Tic-Tac-Toe - play against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with an unbeatable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive games in the terminal
    Play(PlayArgs),

    /// Pit two computer players against each other and report the tally
    Match {
        /// Difficulty of the X player (easy, medium, hard or 1-3)
        #[arg(short = 'x', long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty of the O player (easy, medium, hard or 1-3)
        #[arg(short = 'o', long, default_value = "hard")]
        o: Difficulty,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Seed for repeatable matches
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options for interactive play. Each one overrides the config file.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Play against the computer or another human
    #[arg(long, value_enum)]
    pub opponent: Option<Opponent>,

    /// Computer difficulty (easy, medium, hard or 1-3)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Let the computer play X and move first
    #[arg(long)]
    pub ai_first: bool,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    pub think_delay_ms: Option<u64>,
}

impl PlayArgs {
    /// Collects the flags that were actually given.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            opponent: self.opponent,
            difficulty: self.difficulty,
            ai_first: self.ai_first.then_some(true),
            seed: self.seed,
            think_delay_ms: self.think_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "play",
            "--difficulty",
            "2",
            "--ai-first",
            "--seed",
            "9",
        ]);
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.difficulty, Some(Difficulty::Medium));
        assert_eq!(overrides.ai_first, Some(true));
        assert_eq!(overrides.seed, Some(9));
        assert_eq!(overrides.opponent, None);
    }

    #[test]
    fn test_parse_match() {
        let cli = Cli::parse_from(["tictactoe", "match", "-x", "easy", "-o", "hard", "-n", "5"]);
        match cli.command {
            Command::Match { x, o, games, seed } => {
                assert_eq!(x, Difficulty::Easy);
                assert_eq!(o, Difficulty::Hard);
                assert_eq!(games, 5);
                assert_eq!(seed, None);
            }
            Command::Play(_) => panic!("expected match"),
        }
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["tictactoe", "play", "-d", "expert"]).is_err());
    }
}
