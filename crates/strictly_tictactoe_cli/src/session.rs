//! Interactive session: games back to back until the player quits.

use crate::config::{ConfigOverrides, GameConfig, Opponent};
use crate::console::Console;
use crate::orchestrator::Orchestrator;
use crate::players::{AiPlayer, HumanPlayer, Player};
use anyhow::Result;
use crossterm::style::Stylize;
use std::str::FromStr;
use std::time::Duration;
use strictly_tictactoe::Difficulty;
use tracing::{debug, info, instrument};

/// How a session settles who plays and at what strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    /// Use the configuration as given for every game.
    Fixed,
    /// Ask before each game, falling back to the configuration when
    /// input runs out.
    Ask,
}

/// Seats the players described by `config` as (X, O).
pub fn seat_players(config: &GameConfig) -> (Box<dyn Player>, Box<dyn Player>) {
    match config.opponent() {
        Opponent::Human => {
            let x: Box<dyn Player> = Box::new(HumanPlayer::new("Player X"));
            let o: Box<dyn Player> = Box::new(HumanPlayer::new("Player O"));
            (x, o)
        }
        Opponent::Ai => {
            let ai = AiPlayer::new(
                format!("{} AI", config.difficulty()),
                *config.difficulty(),
                *config.seed(),
            )
            .with_think_delay(Duration::from_millis(*config.think_delay_ms()));
            let ai: Box<dyn Player> = Box::new(ai);
            let human: Box<dyn Player> = Box::new(HumanPlayer::new("You"));
            if *config.ai_first() {
                (ai, human)
            } else {
                (human, ai)
            }
        }
    }
}

/// Asks a yes/no question until it gets an answer. Closed input means no.
pub fn ask_yes_no(console: &mut dyn Console, question: &str) -> Result<bool> {
    loop {
        let Some(answer) = console.read_line(&format!("{}\n[Yes: Y]/[No: N]: ", question))? else {
            return Ok(false);
        };
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => console.say("Invalid input. Please enter \"Y\" or \"N\".")?,
        }
    }
}

/// Asks for a difficulty until one of 1-3 (or its name) is given.
///
/// Closed input keeps `fallback`.
pub fn ask_difficulty(console: &mut dyn Console, fallback: Difficulty) -> Result<Difficulty> {
    loop {
        let Some(answer) =
            console.read_line("Choose the difficulty of AI:\n1. Easy\n2. Medium\n3. Hard\n[1-3]: ")?
        else {
            return Ok(fallback);
        };
        match Difficulty::from_str(&answer) {
            Ok(difficulty) => return Ok(difficulty),
            Err(_) => console.say("Invalid input. Please choose from 1 to 3.")?,
        }
    }
}

/// Asks for the opponent, and for a computer opponent its difficulty and
/// who moves first.
pub fn ask_setup(console: &mut dyn Console, config: &GameConfig) -> Result<ConfigOverrides> {
    if !ask_yes_no(console, "Do you want to play with AI?")? {
        return Ok(ConfigOverrides {
            opponent: Some(Opponent::Human),
            ..Default::default()
        });
    }
    let difficulty = ask_difficulty(console, *config.difficulty())?;
    let human_first = ask_yes_no(console, "Do you want to play first?")?;
    Ok(ConfigOverrides {
        opponent: Some(Opponent::Ai),
        difficulty: Some(difficulty),
        ai_first: Some(!human_first),
        ..Default::default()
    })
}

/// Plays games until the player declines another one.
#[instrument(skip_all, fields(opponent = %config.opponent(), difficulty = %config.difficulty(), ?setup))]
pub fn run_session(config: &GameConfig, setup: Setup, console: &mut dyn Console) -> Result<()> {
    console.say(&"\nWelcome to Tic-Tac-Toe\n".red().to_string())?;

    let mut fixed = match setup {
        Setup::Fixed => {
            let (player_x, player_o) = seat_players(config);
            Some(Orchestrator::new(player_x, player_o))
        }
        Setup::Ask => None,
    };

    let mut played = 0usize;
    loop {
        match fixed.as_mut() {
            Some(orchestrator) => {
                orchestrator.play_game(console)?;
            }
            None => {
                let chosen = config.clone().with_overrides(ask_setup(console, config)?);
                debug!(
                    opponent = %chosen.opponent(),
                    difficulty = %chosen.difficulty(),
                    ai_first = *chosen.ai_first(),
                    "Players chosen"
                );
                let (player_x, player_o) = seat_players(&chosen);
                Orchestrator::new(player_x, player_o).play_game(console)?;
            }
        }
        played += 1;
        if !ask_yes_no(console, "\nDo you want to play another game?")? {
            break;
        }
    }

    info!(played, "Session finished");
    console.say("\nThank you for playing. Bye!")?;
    Ok(())
}
