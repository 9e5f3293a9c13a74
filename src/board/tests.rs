use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_sign_roundtrip() {
    assert_eq!(Stone::try_from(-1i8), Ok(Stone::Black));
    assert_eq!(Stone::try_from(1i8), Ok(Stone::White));
    assert_eq!(Stone::Black.sign(), -1);
    assert_eq!(Stone::White.sign(), 1);
}

#[test]
fn test_stone_invalid_color() {
    assert_eq!(Stone::try_from(0i8), Err(EngineError::InvalidColor(0)));
    assert_eq!(Stone::try_from(2i8), Err(EngineError::InvalidColor(2)));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, CENTER);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(
        Pos::try_new(15, 3),
        Err(EngineError::OutOfBounds { row: 15, col: 3 })
    );
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(2, 12)));
    assert_eq!(pos.offset(0, 1, 1), None);
    assert_eq!(pos.offset(-1, 0, 1), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_bitboard_iter_row_major() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(14, 14));
    bb.set(Pos::new(0, 3));
    bb.set(Pos::new(8, 2));
    let cells: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(cells, vec![Pos::new(0, 3), Pos::new(8, 2), Pos::new(14, 14)]);
    assert_eq!(bb.count(), 3);
}

#[test]
fn test_board_try_place_rejects_occupied() {
    let mut board = Board::new();
    board.try_place(CENTER, Stone::Black).unwrap();
    let before = board;

    assert_eq!(
        board.try_place(CENTER, Stone::White),
        Err(EngineError::Occupied(CENTER))
    );
    assert_eq!(board, before, "failed placement must not touch the board");
    assert!(board.try_place(Pos::new(0, 0), Stone::Empty).is_err());
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_board_signs_roundtrip() {
    let mut board = Board::new();
    board.place_stone(Pos::new(3, 4), Stone::Black);
    board.place_stone(Pos::new(10, 2), Stone::White);

    let grid = board.to_signs();
    assert_eq!(grid[3][4], -1);
    assert_eq!(grid[10][2], 1);
    assert_eq!(Board::from_signs(&grid), Ok(board));

    let mut bad = grid;
    bad[0][0] = 5;
    assert_eq!(Board::from_signs(&bad), Err(EngineError::InvalidColor(5)));
}

#[test]
fn test_board_has_neighbor() {
    let mut board = Board::new();
    board.place_stone(CENTER, Stone::Black);
    assert!(board.has_neighbor(Pos::new(8, 8), 1));
    assert!(!board.has_neighbor(Pos::new(9, 9), 1));
    assert!(board.has_neighbor(Pos::new(9, 9), 2));
}
