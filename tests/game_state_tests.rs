use tictactoe::{BoardError, GameEngine, GameState, GameStatus, Side};

#[test]
fn test_apply_move_reports_status() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.apply_move(4, Side::X).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.apply_move(0, Side::O).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.apply_move(2, Side::X).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.apply_move(1, Side::O).unwrap(), GameStatus::InProgress);
    // 4-2-6 completes the anti-diagonal
    assert_eq!(engine.apply_move(6, Side::X).unwrap(), GameStatus::Won(Side::X));
    assert_eq!(engine.status(), GameStatus::Won(Side::X));
}

#[test]
fn test_apply_move_rejects_taken_cell() {
    let mut engine = GameEngine::new();
    engine.apply_move(4, Side::X).unwrap();
    assert_eq!(
        engine.apply_move(4, Side::O).unwrap_err(),
        BoardError::IllegalMove { position: 4 }
    );
}

#[test]
fn test_state_snapshot_and_restore() {
    let mut engine = GameEngine::new();
    engine.apply_move(4, Side::X).unwrap();
    engine.apply_move(0, Side::O).unwrap();

    let state = engine.state();
    assert_eq!(state.status, GameStatus::InProgress);

    let restored = GameEngine::from_state(state);
    assert_eq!(restored.status(), state.status);
    assert_eq!(restored.state(), state);
}

#[test]
fn test_game_state_bincode_roundtrip() {
    let mut engine = GameEngine::new();
    engine.apply_move(0, Side::X).unwrap();
    engine.apply_move(4, Side::O).unwrap();
    engine.apply_move(8, Side::X).unwrap();

    let state = engine.state();
    let bytes = bincode::serialize(&state).unwrap();
    let decoded: GameState = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, state);

    let restored = GameEngine::from_state(decoded);
    assert_eq!(restored.status(), GameStatus::InProgress);
    assert_eq!(restored.board().move_count(), 3);
}
