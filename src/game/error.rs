use std::fmt;

use super::GameResult;
use crate::board::{Color, MoveError, Square};

/// Error type for session-level move attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A king has already been captured
    GameOver { result: GameResult },
    /// The piece on `square` belongs to the side not on move
    NotYourTurn { square: Square, turn: Color },
    /// The board rejected the move
    Move(MoveError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver { result } => write!(f, "Game is over: {result}"),
            GameError::NotYourTurn { square, turn } => {
                write!(f, "Piece on {square} cannot move, {turn} to play")
            }
            GameError::Move(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}
