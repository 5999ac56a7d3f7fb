use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center of 15x15
    assert_eq!(pos.to_index(15), 7 * 15 + 7);
    assert_eq!(pos.to_index(15), 112);

    let pos2 = Pos::from_index(112, 15);
    assert_eq!(pos2, Pos::new(7, 7));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 10));
    assert!(Pos::is_valid(9, 9, 10));
    assert!(!Pos::is_valid(-1, 0, 10));
    assert!(!Pos::is_valid(0, -1, 10));
    assert!(!Pos::is_valid(10, 0, 10));
    assert!(!Pos::is_valid(0, 10, 10));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(1, 1, 7), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0, 7), None);
    assert_eq!(Pos::new(6, 6).offset(0, 1, 7), None);
}

#[test]
fn test_pos_manhattan() {
    assert_eq!(Pos::new(7, 7).manhattan(Pos::new(7, 7)), 0);
    assert_eq!(Pos::new(5, 9).manhattan(Pos::new(7, 7)), 4);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_rejects_invalid_size() {
    assert_eq!(Board::new(0), Err(BoardError::InvalidSize(0)));
    assert_eq!(Board::new(256), Err(BoardError::InvalidSize(256)));
    assert!(Board::new(1).is_ok());
}

#[test]
fn test_board_center() {
    assert_eq!(Board::new(15).unwrap().center(), Pos::new(7, 7));
    assert_eq!(Board::new(10).unwrap().center(), Pos::new(5, 5));
    assert_eq!(Board::new(7).unwrap().center(), Pos::new(3, 3));
}

#[test]
fn test_place_and_clear_track_occupancy() {
    let mut board = Board::new(3).unwrap();
    assert!(board.is_board_empty());

    board.place(Pos::new(1, 1), Mark::X);
    assert_eq!(board.get(Pos::new(1, 1)), Mark::X);
    assert_eq!(board.stone_count(), 1);

    board.clear(Pos::new(1, 1));
    assert!(board.is_empty(Pos::new(1, 1)));
    assert_eq!(board.stone_count(), 0);

    // Clearing an empty cell is a no-op
    board.clear(Pos::new(0, 0));
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_try_place_guards_contract() {
    let mut board = Board::new(5).unwrap();
    assert_eq!(board.try_place(Pos::new(2, 2), Mark::Empty), Err(BoardError::EmptyMark));
    assert_eq!(
        board.try_place(Pos::new(5, 0), Mark::X),
        Err(BoardError::OutOfBounds { row: 5, col: 0, size: 5 })
    );
    assert!(board.try_place(Pos::new(2, 2), Mark::X).is_ok());
    assert_eq!(
        board.try_place(Pos::new(2, 2), Mark::O),
        Err(BoardError::Occupied { row: 2, col: 2 })
    );
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_board_full() {
    let mut board = Board::new(2).unwrap();
    for idx in 0..4 {
        let mark = if idx % 2 == 0 { Mark::X } else { Mark::O };
        board.place(Pos::from_index(idx, 2), mark);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_from_rows() {
    let board = Board::from_rows(&[
        "X . .",
        ". O .",
        ". . X",
    ])
    .unwrap();
    assert_eq!(board.size(), 3);
    assert_eq!(board.get(Pos::new(0, 0)), Mark::X);
    assert_eq!(board.get(Pos::new(1, 1)), Mark::O);
    assert_eq!(board.get(Pos::new(2, 2)), Mark::X);
    assert_eq!(board.stone_count(), 3);

    let occupied: Vec<_> = board.occupied_cells().collect();
    assert_eq!(occupied[0], (Pos::new(0, 0), Mark::X));
    assert_eq!(occupied[1], (Pos::new(1, 1), Mark::O));
}

#[test]
fn test_from_rows_rejects_ragged_input() {
    assert!(Board::from_rows(&["X .", "."]).is_err());
}

#[test]
fn test_from_rows_rejects_unknown_characters() {
    assert_eq!(
        Board::from_rows(&["X .", ". -"]),
        Err(BoardError::InvalidCell { row: 1, col: 1, ch: '-' })
    );
    assert_eq!(
        Board::from_rows(&["_ X", ". ."]),
        Err(BoardError::InvalidCell { row: 0, col: 0, ch: '_' })
    );
}

#[test]
fn test_default_board_is_15() {
    let board = Board::default();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert!(board.is_board_empty());
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(3, 12).to_string(), "(3, 12)");
}
