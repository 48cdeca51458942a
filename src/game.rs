//! Game engine: validated move application and status transitions.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus};
use tracing::instrument;

/// Tic-tac-toe game engine.
///
/// Wraps a [`GameState`] and enforces the rules on every mutation: a
/// move is applied only while the game is in progress and the target
/// square is empty, and the status is re-derived immediately after each
/// placement. The status transition to `Won` or `Draw` happens exactly
/// once; afterwards the engine rejects moves until [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Checks whether a mark may be placed at the position: the game is
    /// still in progress and the square is empty.
    pub fn can_place(&self, pos: Position) -> bool {
        self.state.status() == GameStatus::InProgress && self.state.board().is_empty(pos)
    }

    /// Places the current player's mark at the given position.
    ///
    /// Returns the status after the move, which the caller inspects to
    /// decide whether the game continues.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already finished.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.state.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.current_player();
        self.state.apply_move(pos, player);

        let status = rules::evaluate(self.state.board());
        if status != GameStatus::InProgress {
            self.state.set_status(status);
        }

        Ok(status)
    }

    /// Rebuilds a game from a recorded move sequence.
    ///
    /// Each move's player must match the side to move at that point, so
    /// a serialized history replays into the identical state it was
    /// recorded from.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::WrongPlayer`] on a turn-order mismatch, plus
    /// the usual [`Game::make_move`] errors.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Game::new();
        for mv in moves {
            if game.state.status() != GameStatus::InProgress {
                return Err(MoveError::GameOver);
            }
            if mv.player() != game.state.current_player() {
                return Err(MoveError::WrongPlayer(mv.player()));
            }
            game.make_move(mv.position())?;
        }
        Ok(game)
    }

    /// Clears the board and restarts with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
