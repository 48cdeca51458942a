//! Game session management: the human-vs-computer interface.

use crate::action::MoveError;
use crate::game::Game;
use crate::position::Position;
use crate::search;
use crate::types::{GameStatus, Player};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A human-vs-computer game session.
///
/// Owns the [`Game`] plus the role assignment: one mark belongs to the
/// human, the other to the computer. The session is the only place raw
/// cell indices enter the crate; everything behind it works in
/// [`Position`] terms.
///
/// Lifecycle: `InProgress` until a move completes a line or fills the
/// board, then finished until [`GameSession::reset`] starts over with an
/// empty board and X to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    game: Game,
    computer: Player,
}

impl GameSession {
    /// Creates a session with the conventional roles: human plays X and
    /// moves first, computer plays O.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            computer: Player::O,
        }
    }

    /// Creates a session with the computer on the given mark.
    ///
    /// With the computer on X, call [`GameSession::request_computer_move`]
    /// before the first human move.
    #[instrument]
    pub fn with_computer_mark(computer: Player) -> Self {
        Self {
            game: Game::new(),
            computer,
        }
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the computer's mark.
    pub fn computer_mark(&self) -> Player {
        self.computer
    }

    /// Returns the human's mark.
    pub fn human_mark(&self) -> Player {
        self.computer.opponent()
    }

    /// Checks whether the cell at `index` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `index` is not in 0-8.
    pub fn is_cell_empty(&self, index: usize) -> Result<bool, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        Ok(self.game.state().board().is_empty(pos))
    }

    /// Checks whether a mark could be placed at `index` right now: the
    /// index is on the board, the game is live, and the cell is empty.
    pub fn can_place(&self, index: usize) -> bool {
        Position::from_index(index)
            .map(|pos| self.game.can_place(pos))
            .unwrap_or(false)
    }

    /// Applies a human move at the given cell index.
    ///
    /// Returns the status after the move; the caller inspects it to
    /// decide whether to request the computer's reply or announce the
    /// result.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `index` is not in 0-8.
    /// - [`MoveError::WrongPlayer`] if it is the computer's turn.
    /// - [`MoveError::GameOver`] / [`MoveError::SquareOccupied`] from the
    ///   engine.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected out-of-range cell index");
            MoveError::OutOfRange(index)
        })?;

        let human = self.human_mark();
        if self.game.status() == GameStatus::InProgress
            && self.game.state().current_player() != human
        {
            warn!(%human, "Human tried to move on the computer's turn");
            return Err(MoveError::WrongPlayer(human));
        }

        let status = self.game.make_move(pos)?;
        info!(%pos, ?status, "Human move applied");
        Ok(status)
    }

    /// Computes and applies the computer's move.
    ///
    /// Returns the chosen position together with the status after the
    /// move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already finished.
    /// - [`MoveError::WrongPlayer`] if it is the human's turn.
    #[instrument(skip(self))]
    pub fn request_computer_move(&mut self) -> Result<(Position, GameStatus), MoveError> {
        if self.game.status() != GameStatus::InProgress {
            warn!("Computer move requested on a finished game");
            return Err(MoveError::GameOver);
        }
        if self.game.state().current_player() != self.computer {
            warn!(computer = %self.computer, "Computer move requested on the human's turn");
            return Err(MoveError::WrongPlayer(self.computer));
        }

        // An in-progress game always has an empty cell, so the selector
        // cannot come back empty-handed here.
        let pos = search::select_move(self.game.state().board(), self.computer)
            .ok_or(MoveError::GameOver)?;

        let status = self.game.make_move(pos)?;
        info!(%pos, ?status, "Computer move applied");
        Ok((pos, status))
    }

    /// Restarts the session: empty board, X to move, roles unchanged.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        debug!("Session reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Error from session registry operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A session with this ID already exists.
    #[display("Session {} already exists", _0)]
    AlreadyExists(SessionId),

    /// No session with this ID exists.
    #[display("Session {} not found", _0)]
    NotFound(SessionId),
}

impl std::error::Error for SessionError {}

/// Manages all game sessions.
///
/// A thread-safe registry keyed by [`SessionId`], so several independent
/// boards can run side by side without any process-wide game state.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new game session with the conventional roles.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        sessions.insert(id.clone(), GameSession::new());
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Gets a snapshot of a session by ID.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Stores a session back under the given ID.
    #[instrument(skip(self, session))]
    pub fn update_session(&self, id: SessionId, session: GameSession) {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(id, session);
        debug!("Session updated");
    }

    /// Removes a session, returning it if it existed.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<GameSession, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        let ids: Vec<_> = sessions.keys().cloned().collect();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
