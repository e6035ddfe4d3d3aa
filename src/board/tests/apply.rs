//! Move application tests.

use crate::board::{Board, BoardBuilder, Color, MoveError, MoveOutcome, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Squares whose contents differ between two boards.
fn changed_squares(before: &Board, after: &Board) -> Vec<Square> {
    Square::all()
        .filter(|&s| before.get(s) != after.get(s))
        .collect()
}

#[test]
fn test_quiet_move_relocates_piece() {
    let mut board = Board::new();
    let before = board.clone();
    let outcome = board.apply(sq("g1"), sq("f3")).unwrap();

    assert_eq!(outcome, MoveOutcome::Quiet);
    assert_eq!(board.get(sq("f3")), Some((Color::White, Piece::Knight)));
    assert!(board.is_empty(sq("g1")));
    assert_eq!(changed_squares(&before, &board), vec![sq("f3"), sq("g1")]);
}

#[test]
fn test_capture_reported() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .piece(Square(0, 3), Color::Black, Piece::Pawn)
        .build();
    let outcome = board.apply(Square(0, 0), Square(0, 3)).unwrap();

    assert_eq!(outcome, MoveOutcome::Capture);
    assert!(!outcome.is_compound());
    assert_eq!(board.get(Square(0, 3)), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_count(), 1);
}

#[test]
fn test_kingside_castle_moves_rook() {
    let mut board = BoardBuilder::new()
        .piece(Square(4, 7), Color::White, Piece::King)
        .piece(Square(7, 7), Color::White, Piece::Rook)
        .build();
    let before = board.clone();
    let outcome = board.apply(Square(4, 7), Square(6, 7)).unwrap();

    assert_eq!(outcome, MoveOutcome::Castle);
    assert!(outcome.is_compound());
    assert_eq!(board.get(Square(6, 7)), Some((Color::White, Piece::King)));
    assert_eq!(board.get(Square(5, 7)), Some((Color::White, Piece::Rook)));
    assert!(board.is_empty(Square(4, 7)));
    assert!(board.is_empty(Square(7, 7)));
    assert_eq!(changed_squares(&before, &board).len(), 4);
}

#[test]
fn test_queenside_castle_moves_rook() {
    let mut board = Board::from_layout(
        "\
r...k...
........
........
........
........
........
........
....K...
",
    );
    let outcome = board.apply(sq("e8"), sq("c8")).unwrap();

    assert_eq!(outcome, MoveOutcome::Castle);
    assert_eq!(board.get(sq("c8")), Some((Color::Black, Piece::King)));
    assert_eq!(board.get(sq("d8")), Some((Color::Black, Piece::Rook)));
    assert!(board.is_empty(sq("a8")));
    assert!(board.is_empty(sq("b8")));
}

#[test]
fn test_single_king_step_is_not_castle() {
    let mut board = BoardBuilder::new()
        .piece(Square(4, 7), Color::White, Piece::King)
        .piece(Square(7, 7), Color::White, Piece::Rook)
        .build();
    let outcome = board.apply(Square(4, 7), Square(5, 7)).unwrap();

    assert_eq!(outcome, MoveOutcome::Quiet);
    assert_eq!(board.get(Square(7, 7)), Some((Color::White, Piece::Rook)));
}

#[test]
fn test_white_pawn_promotes_to_queen() {
    let mut board = BoardBuilder::new()
        .piece(Square(3, 1), Color::White, Piece::Pawn)
        .build();
    let outcome = board.apply(Square(3, 1), Square(3, 0)).unwrap();

    assert_eq!(outcome, MoveOutcome::Promotion);
    assert_eq!(board.get(Square(3, 0)), Some((Color::White, Piece::Queen)));
    assert!(board.is_empty(Square(3, 1)));
}

#[test]
fn test_black_capture_promotion_reports_promotion() {
    let mut board = BoardBuilder::new()
        .piece(Square(2, 6), Color::Black, Piece::Pawn)
        .piece(Square(1, 7), Color::White, Piece::Knight)
        .build();
    let outcome = board.apply(Square(2, 6), Square(1, 7)).unwrap();

    assert_eq!(outcome, MoveOutcome::Promotion);
    assert_eq!(board.get(Square(1, 7)), Some((Color::Black, Piece::Queen)));
    assert_eq!(board.piece_count(), 1);
}

#[test]
fn test_illegal_destination_rejected_without_change() {
    let mut board = Board::new();
    let before = board.clone();
    let err = board.apply(sq("e2"), sq("e5")).unwrap_err();

    assert_eq!(
        err,
        MoveError::IllegalMove {
            from: sq("e2"),
            to: sq("e5")
        }
    );
    assert_eq!(board, before);
}

#[test]
fn test_empty_origin_rejected() {
    let mut board = Board::new();
    let err = board.apply(sq("e4"), sq("e5")).unwrap_err();
    assert_eq!(err, MoveError::InvalidOrigin { square: sq("e4") });
}

#[test]
fn test_king_capture_removes_king() {
    let mut board = BoardBuilder::new()
        .piece(Square(4, 7), Color::White, Piece::King)
        .piece(Square(4, 0), Color::Black, Piece::King)
        .piece(Square(4, 3), Color::White, Piece::Rook)
        .build();
    let outcome = board.apply(Square(4, 3), Square(4, 0)).unwrap();

    assert_eq!(outcome, MoveOutcome::Capture);
    assert!(!board.is_king_present(Color::Black));
    assert!(board.is_king_present(Color::White));
}
