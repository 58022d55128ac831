//! Strictly Tic-Tac-Toe - terminal entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_tictactoe_cli::cli::{Cli, Command, PlayArgs};
use strictly_tictactoe_cli::{GameConfig, Setup, Terminal, run_match, run_session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Match { x, o, games, seed } => {
            let tally = run_match(x, o, games, seed)?;
            println!("{} (X) vs {} (O) over {} games", x, o, tally.games());
            println!("{}", tally);
            Ok(())
        }
    }
}

/// Runs interactive games on stdin/stdout.
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let overrides = args.overrides();
    let setup = if args.config.is_none() && !overrides.chooses_players() {
        Setup::Ask
    } else {
        Setup::Fixed
    };
    let config = GameConfig::load(args.config.as_deref())?.with_overrides(overrides);
    info!(?config, ?setup, "Starting interactive session");

    let mut console = Terminal::new(io::stdin().lock(), io::stdout());
    run_session(&config, setup, &mut console)
}
