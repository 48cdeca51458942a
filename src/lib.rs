//! Tic-tac-toe game core with a perfect-play computer opponent.
//!
//! The crate holds the board model, the rules (win/draw detection), and a
//! minimax move selector that searches the full game tree. Rendering,
//! input wiring, and pacing belong to the caller; the library surface is
//! the [`GameSession`] entry points plus read-only state accessors.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Position`] - typed cell
//!   storage where out-of-range indices are unrepresentable
//! - **Rules**: pure win/draw evaluation over a board
//! - **Engine**: [`Game`] - validated move application and status
//!   transitions
//! - **Selector**: [`select_move`] - exhaustive minimax search
//! - **Session**: [`GameSession`] - the human-vs-computer aggregate,
//!   [`SessionManager`] for concurrent sessions
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, GameStatus, MoveError};
//!
//! # fn main() -> Result<(), MoveError> {
//! let mut session = GameSession::new();
//!
//! // Human (X) takes the center.
//! let status = session.submit_move(4)?;
//! assert_eq!(status, GameStatus::InProgress);
//!
//! // Computer (O) answers with its best move.
//! let (reply, status) = session.request_computer_move()?;
//! assert!(!session.game().state().board().is_empty(reply));
//! assert_eq!(status, GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod position;
mod rules;
mod search;
mod session;
mod types;

// Crate-level exports - actions and errors
pub use action::{Move, MoveError};

// Crate-level exports - game engine
pub use game::Game;

// Crate-level exports - board positions
pub use position::Position;

// Crate-level exports - rules
pub use rules::{WINNING_LINES, check_winner, evaluate, is_draw, is_full};

// Crate-level exports - move selection
pub use search::select_move;

// Crate-level exports - session management
pub use session::{GameSession, SessionError, SessionId, SessionManager};

// Crate-level exports - core types
pub use types::{Board, GameState, GameStatus, Player, Square};
