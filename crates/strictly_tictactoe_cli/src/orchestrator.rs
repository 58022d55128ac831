//! Game orchestration between players.

use crate::console::{Console, Silent};
use crate::players::{AiPlayer, Player};
use anyhow::Result;
use strictly_tictactoe::{Difficulty, GameState, GameStatus, MoveError, Player as Mark};
use tracing::{debug, info, instrument, warn};

/// Runs games between two players, X always moving first.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self { player_x, player_o }
    }

    /// Plays one fresh game to the end and returns its result.
    ///
    /// The board is rendered once at the start and after every accepted
    /// move. A move on an occupied cell is refused and the same player
    /// is asked again.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn play_game(&mut self, console: &mut dyn Console) -> Result<GameStatus> {
        info!("Starting game");
        let mut game = GameState::new();
        console.render_board(game.board())?;

        while game.status() == GameStatus::InProgress {
            let player = match game.to_move() {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let position = player.get_move(&mut game, console)?;

            match game.apply(position) {
                Ok(()) => {
                    debug!(player = %player.name(), %position, "Move applied");
                    console.render_board(game.board())?;
                }
                Err(MoveError::CellOccupied(_)) => {
                    warn!(player = %player.name(), %position, "Occupied cell chosen");
                    console.say("Cell already occupied.")?;
                }
                Err(err @ MoveError::GameOver) => return Err(err.into()),
            }
        }

        let status = game.status();
        info!(?status, moves = game.occupied_count(), "Game over");
        console.announce(status)?;
        Ok(status)
    }
}

/// Results of a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl MatchTally {
    /// Counts one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total games counted.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for MatchTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` computer-only games and tallies the results.
///
/// With a seed the whole match is repeatable.
#[instrument]
pub fn run_match(x: Difficulty, o: Difficulty, games: usize, seed: Option<u64>) -> Result<MatchTally> {
    let player_x = AiPlayer::new(format!("{} AI (X)", x), x, seed);
    let player_o = AiPlayer::new(format!("{} AI (O)", o), o, seed.map(|s| s.wrapping_add(1)));
    let mut orchestrator = Orchestrator::new(Box::new(player_x), Box::new(player_o));

    let mut tally = MatchTally::default();
    for _ in 0..games {
        tally.record(orchestrator.play_game(&mut Silent)?);
    }
    info!(%tally, "Match finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_records() {
        let mut tally = MatchTally::default();
        tally.record(GameStatus::Won(Mark::X));
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::Draw);
        assert_eq!(tally.games(), 3);
        assert_eq!(tally.to_string(), "X wins: 1, O wins: 0, draws: 2");
    }

    #[test]
    fn test_hard_match_all_draws() {
        let tally = run_match(Difficulty::Hard, Difficulty::Hard, 3, Some(1)).unwrap();
        assert_eq!(tally.draws, 3);
    }
}
