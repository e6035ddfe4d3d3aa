//! Whole-game tests driven through the session API.

use chess_rules::board::{Color, MoveOutcome, Piece, Square};
use chess_rules::game::{ClickResult, Game, GameError, GameResult, SharedGame};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Play a list of "e2e4"-style moves by clicking origin then destination.
fn click_moves(game: &mut Game, moves: &[&str]) -> Vec<MoveOutcome> {
    moves
        .iter()
        .map(|m| {
            let (from, to) = m.split_at(2);
            assert_eq!(game.click(sq(from)), ClickResult::Selected, "select {m}");
            match game.click(sq(to)) {
                ClickResult::Moved(outcome) => outcome,
                other => panic!("move {m} not played: {other:?}"),
            }
        })
        .collect()
}

#[test]
fn king_capture_wins_the_game() {
    let mut game = Game::new();
    let outcomes = click_moves(
        &mut game,
        &[
            "e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6", "h5f7", "a7a6", "f7e8",
        ],
    );

    assert_eq!(outcomes[6], MoveOutcome::Capture);
    assert_eq!(outcomes[8], MoveOutcome::Capture);
    assert_eq!(game.result(), Some(GameResult { winner: Color::White }));
    assert!(!game.board().is_king_present(Color::Black));
    assert_eq!(game.history().len(), 9);
    assert_eq!(game.click(sq("a6")), ClickResult::Ignored);
}

#[test]
fn castling_by_clicks_moves_both_pieces() {
    let mut game = Game::new();
    let outcomes = click_moves(
        &mut game,
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"],
    );

    assert_eq!(outcomes.last(), Some(&MoveOutcome::Castle));
    let board = game.board();
    assert_eq!(board.get(sq("g1")), Some((Color::White, Piece::King)));
    assert_eq!(board.get(sq("f1")), Some((Color::White, Piece::Rook)));
    assert!(board.is_empty(sq("h1")));
    assert!(board.is_empty(sq("e1")));
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn refused_click_keeps_turn() {
    let mut game = Game::new();
    assert_eq!(game.click(sq("e2")), ClickResult::Selected);
    assert_eq!(game.click(sq("e5")), ClickResult::Deselected);
    assert_eq!(game.turn(), Color::White);
    assert!(game.history().is_empty());

    assert_eq!(
        game.play(sq("d7"), sq("d5")),
        Err(GameError::NotYourTurn {
            square: sq("d7"),
            turn: Color::White
        })
    );
}

#[test]
fn shared_game_across_threads() {
    let shared = SharedGame::new(Game::new());
    let white = shared.clone();
    std::thread::spawn(move || white.play(sq("e2"), sq("e4")).unwrap())
        .join()
        .unwrap();

    let black = shared.clone();
    std::thread::spawn(move || black.play(sq("e7"), sq("e5")).unwrap())
        .join()
        .unwrap();

    let board = shared.snapshot();
    assert_eq!(board.piece_on(sq("e4")), Some(Piece::Pawn));
    assert_eq!(board.piece_on(sq("e5")), Some(Piece::Pawn));
    assert_eq!(shared.with(|g| g.turn()), Color::White);
}
