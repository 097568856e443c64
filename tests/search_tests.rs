use tictactoe::{best_move, Board, BoardError, Side, CENTER};

#[test]
fn test_opening_move_is_center() {
    let board = Board::new();
    assert_eq!(best_move(&board, Side::X).unwrap(), CENTER);
    assert_eq!(best_move(&board, Side::O).unwrap(), CENTER);
}

#[test]
fn test_reply_to_center_opening_is_a_corner() {
    let board = Board::from_moves([(CENTER, Side::O)]).unwrap();
    let reply = best_move(&board, Side::X).unwrap();
    assert_eq!(reply, 0);
    assert!([0u8, 2, 6, 8].contains(&reply));
}

#[test]
fn test_takes_immediate_win_over_slower_one() {
    // X holds 0 and 1 with the top row open; 2 wins on the spot and must
    // outrank any longer route.
    let board = Board::from_moves([
        (0, Side::X),
        (3, Side::O),
        (1, Side::X),
        (4, Side::O),
    ])
    .unwrap();
    assert_eq!(best_move(&board, Side::X).unwrap(), 2);
}

#[test]
fn test_blocks_immediate_threat() {
    // X threatens the top row at 2; every other reply loses outright.
    let board = Board::from_moves([(0, Side::X), (4, Side::O), (1, Side::X)]).unwrap();
    assert_eq!(best_move(&board, Side::O).unwrap(), 2);
}

#[test]
fn test_blocking_move_forces_draw() {
    // Late-game snapshot: X on 0, 2, 7, 8 and O on 1, 4, 6 leave only
    // 3 and 5 open, and X threatens 2-5-8.
    let mut board = Board::from_moves([
        (0, Side::X),
        (1, Side::O),
        (2, Side::X),
        (4, Side::O),
        (6, Side::O),
        (7, Side::X),
        (8, Side::X),
    ])
    .unwrap();
    assert!(!board.is_complete());

    let block = best_move(&board, Side::O).unwrap();
    assert_eq!(block, 5);
    board.place_move(block, Side::O).unwrap();
    assert_eq!(board.winner(), None);

    // One forced reply remains; the game runs out to a draw.
    let last = best_move(&board, Side::X).unwrap();
    assert_eq!(last, 3);
    board.place_move(last, Side::X).unwrap();
    assert!(board.is_draw());
}

#[test]
fn test_no_moves_available_on_won_board() {
    let board = Board::from_moves([(0, Side::X), (1, Side::X), (2, Side::X)]).unwrap();
    assert_eq!(
        best_move(&board, Side::O).unwrap_err(),
        BoardError::NoMovesAvailable
    );
}

#[test]
fn test_no_moves_available_on_full_board() {
    let board = Board::from_moves([
        (0, Side::X),
        (1, Side::O),
        (2, Side::X),
        (3, Side::X),
        (4, Side::O),
        (5, Side::O),
        (6, Side::O),
        (7, Side::X),
        (8, Side::X),
    ])
    .unwrap();
    assert!(board.is_draw());
    assert_eq!(
        best_move(&board, Side::X).unwrap_err(),
        BoardError::NoMovesAvailable
    );
}

#[test]
fn test_best_move_is_deterministic() {
    let board = Board::from_moves([(4, Side::X), (0, Side::O), (8, Side::X)]).unwrap();
    let first = best_move(&board, Side::O).unwrap();
    for _ in 0..5 {
        assert_eq!(best_move(&board, Side::O).unwrap(), first);
    }
}
