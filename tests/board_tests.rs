//! Board tests - grid access, merging and row sweeping

use neon_tetris::core::Board;
use neon_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.is_empty());

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(10, 0, Some(PieceKind::I)));
    assert!(!board.is_occupied(10, 0));
}

#[test]
fn test_full_row_detection() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::L));
    }
    assert!(!board.is_row_full(19));
    board.set(9, 19, Some(PieceKind::L));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_clear_single_row_inserts_empty_row_on_top() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::I);
    board.set(2, 18, Some(PieceKind::S));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);

    assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
    assert!(board.row(0).iter().all(|c| c.is_none()));
    assert_eq!(board.cells().len(), BOARD_WIDTH as usize * BOARD_HEIGHT as usize);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::I);
    board.set(0, 18, Some(PieceKind::T));
    board.fill_row(17, PieceKind::J);
    board.set(9, 16, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[17, 19]);

    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(9, 18), Some(Some(PieceKind::Z)));
    assert!(!board.is_row_full(19));
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row(y, PieceKind::O);
    }
    assert_eq!(board.clear_full_rows().len(), 4);
    assert!(board.is_empty());
}

#[test]
fn test_merge_piece_writes_kind() {
    let mut board = Board::new();
    let written = board.merge_piece([(0, 0), (1, 0), (0, 1), (1, 1)], 4, 18, PieceKind::O);
    assert_eq!(written, 4);
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::O)));
    }
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    board.fill_row(3, PieceKind::Z);
    board.clear();
    assert!(board.is_empty());
}
