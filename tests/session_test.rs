//! Tests for the human-vs-computer session interface.

use tictactoe_core::{
    Game, GameSession, GameStatus, Move, MoveError, Player, Position, SessionError,
    SessionManager,
};

#[test]
fn test_new_session_defaults() {
    let session = GameSession::new();
    assert_eq!(session.human_mark(), Player::X);
    assert_eq!(session.computer_mark(), Player::O);
    assert_eq!(session.game().status(), GameStatus::InProgress);
    assert!(session.is_cell_empty(0).unwrap());
    assert!(session.can_place(8));
}

#[test]
fn test_submit_move_out_of_range() {
    let mut session = GameSession::new();
    assert_eq!(session.submit_move(9), Err(MoveError::OutOfRange(9)));
    assert_eq!(
        session.is_cell_empty(42),
        Err(MoveError::OutOfRange(42))
    );
    assert!(!session.can_place(9));
}

#[test]
fn test_submit_move_occupied_cell() {
    let mut session = GameSession::new();
    session.submit_move(4).expect("valid move");
    session.request_computer_move().expect("computer reply");

    let result = session.submit_move(4);
    assert_eq!(
        result,
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_submit_move_on_computers_turn() {
    let mut session = GameSession::new();
    session.submit_move(4).expect("valid move");

    // O has not answered yet; a second human move is out of turn.
    assert_eq!(session.submit_move(0), Err(MoveError::WrongPlayer(Player::X)));
}

#[test]
fn test_request_computer_move_on_humans_turn() {
    let mut session = GameSession::new();
    assert_eq!(
        session.request_computer_move(),
        Err(MoveError::WrongPlayer(Player::O))
    );
}

#[test]
fn test_computer_opens_deterministically_as_x() {
    let mut session = GameSession::with_computer_mark(Player::X);
    assert_eq!(session.human_mark(), Player::O);

    let (pos, status) = session.request_computer_move().expect("computer opens");
    assert_eq!(pos, Position::TopLeft);
    assert_eq!(status, GameStatus::InProgress);
}

#[test]
fn test_greedy_human_loses() {
    // A human who always grabs the first open cell walks into a forced
    // loss; the computer's replies are fully determined.
    let mut session = GameSession::new();

    session.submit_move(0).expect("human 0");
    let (reply, _) = session.request_computer_move().expect("computer reply");
    assert_eq!(reply, Position::Center);

    session.submit_move(1).expect("human 1");
    let (reply, _) = session.request_computer_move().expect("computer reply");
    assert_eq!(reply, Position::TopRight); // blocks the top row

    session.submit_move(3).expect("human 3");
    let (reply, status) = session.request_computer_move().expect("computer reply");
    assert_eq!(reply, Position::BottomLeft); // completes 2-4-6
    assert_eq!(status, GameStatus::Won(Player::O));

    // Finished is terminal for both sides.
    assert_eq!(session.submit_move(5), Err(MoveError::GameOver));
    assert_eq!(session.request_computer_move(), Err(MoveError::GameOver));
}

#[test]
fn test_reset_roundtrip() {
    let mut session = GameSession::new();
    session.submit_move(4).expect("valid move");
    session.request_computer_move().expect("computer reply");

    session.reset();
    assert_eq!(session.game().status(), GameStatus::InProgress);
    assert_eq!(session.game().state().current_player(), Player::X);
    assert!(session.game().state().history().is_empty());
    for index in 0..9 {
        assert!(session.is_cell_empty(index).unwrap());
    }
}

#[test]
fn test_history_serializes_and_replays() {
    let mut session = GameSession::new();
    session.submit_move(4).expect("valid move");
    session.request_computer_move().expect("computer reply");
    session.submit_move(8).expect("valid move");
    session.request_computer_move().expect("computer reply");

    let json = serde_json::to_string(session.game().state().history())
        .expect("history serializes");
    let moves: Vec<Move> = serde_json::from_str(&json).expect("history deserializes");

    let replayed = Game::replay(&moves).expect("valid replay");
    assert_eq!(&replayed, session.game());
}

#[test]
fn test_session_manager_lifecycle() {
    let manager = SessionManager::new();

    manager.create_session("alpha".to_string()).expect("created");
    assert_eq!(
        manager.create_session("alpha".to_string()),
        Err(SessionError::AlreadyExists("alpha".to_string()))
    );

    let mut session = manager.get_session("alpha").expect("exists");
    session.submit_move(4).expect("valid move");
    manager.update_session("alpha".to_string(), session);

    let stored = manager.get_session("alpha").expect("exists");
    assert!(!stored.is_cell_empty(4).unwrap());

    manager.create_session("beta".to_string()).expect("created");
    let mut ids = manager.list_sessions();
    ids.sort();
    assert_eq!(ids, vec!["alpha".to_string(), "beta".to_string()]);

    manager.remove_session("beta").expect("removed");
    assert_eq!(
        manager.remove_session("beta"),
        Err(SessionError::NotFound("beta".to_string()))
    );
    assert!(manager.get_session("beta").is_none());
}
