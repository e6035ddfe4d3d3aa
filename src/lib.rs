pub mod board;
pub mod game;

pub use board::{Board, Color, MoveError, MoveOutcome, MoveSet, Piece, Square};
pub use game::{Game, GameError, SharedGame};
