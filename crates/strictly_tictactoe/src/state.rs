//! Live game state: board, turn and move history.
//!
//! The state is mutated only through [`GameState::apply`] and
//! [`GameState::reverse`]. The search relies on the pair to explore a
//! branch and restore the exact previous state without cloning.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// Complete game state.
///
/// The player to move is not stored: it follows from the first player
/// and the parity of the history length, so it can never fall out of
/// step with the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    first_player: Player,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    /// Creates a new game with the given player to move first.
    #[instrument]
    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            first_player,
            history: Vec::with_capacity(rules::MAX_MOVES),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the player whose marker goes down next.
    pub fn to_move(&self) -> Player {
        if self.history.len() % 2 == 0 {
            self.first_player
        } else {
            self.first_player.opponent()
        }
    }

    /// Returns the player who made the most recent move.
    pub fn last_mover(&self) -> Option<Player> {
        self.last_move().map(|mov| mov.player)
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// True iff the cell still shows its placeholder.
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.board.is_empty(pos)
    }

    /// Number of occupied cells, which is always the history length.
    pub fn occupied_count(&self) -> usize {
        self.history.len()
    }

    /// Empty cells in row-major order.
    pub fn candidates(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Status derived from the most recent move.
    pub fn status(&self) -> GameStatus {
        self.last_move()
            .map_or(GameStatus::InProgress, |mov| rules::evaluate(self, mov.position))
    }

    /// Places the current player's marker at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the game is already won or drawn, and
    /// `MoveError::CellOccupied` if the cell holds a marker. The state is
    /// unchanged on error.
    pub fn apply(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status().is_terminal() {
            debug!(position = %pos, "Rejected move after game end");
            return Err(MoveError::GameOver);
        }
        if !self.is_cell_empty(pos) {
            debug!(position = %pos, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(pos));
        }
        self.place(pos);
        Ok(())
    }

    /// Undoes the most recent move, which must be at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not the most recent move. Only the top of the
    /// history can be reversed.
    pub fn reverse(&mut self, pos: Position) {
        assert_eq!(
            self.history.last().map(|mov| mov.position),
            Some(pos),
            "only the most recent move can be reversed"
        );
        self.undo();
    }

    /// Pops the most recent move and restores its cell's placeholder.
    pub fn undo(&mut self) -> Option<Move> {
        let mov = self.history.pop()?;
        self.board.set(mov.position, Square::Empty);
        debug_assert!(GameInvariants::check_all(self).is_ok());
        Some(mov)
    }

    /// Unchecked placement for the search, which only visits empty cells of
    /// unfinished games.
    pub(crate) fn place(&mut self, pos: Position) {
        debug_assert!(self.is_cell_empty(pos));
        let player = self.to_move();
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        debug_assert!(GameInvariants::check_all(self).is_ok());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
