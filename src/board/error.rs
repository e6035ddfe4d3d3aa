//! Error types for board operations.

use std::fmt;

use super::Square;

/// Error type for move computation and application.
///
/// Both variants are caller bugs; collaborators should refuse the interaction
/// rather than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Origin square is empty or off the board
    InvalidOrigin { square: Square },
    /// Destination is not among the legal destinations of the origin
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidOrigin { square } => {
                write!(f, "No piece to move on {square}")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for layout text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must have exactly 8 non-blank lines
    WrongRankCount { found: usize },
    /// Every rank line must hold exactly 8 cells
    WrongFileCount { rank: usize, found: usize },
    /// Character is neither a piece letter nor '.'
    InvalidPiece { char: char, rank: usize, file: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRankCount { found } => {
                write!(f, "Layout must have 8 ranks, found {found}")
            }
            LayoutError::WrongFileCount { rank, found } => {
                write!(f, "Rank {rank} must have 8 files, found {found}")
            }
            LayoutError::InvalidPiece { char, rank, file } => {
                write!(f, "Invalid piece character '{char}' at file {file}, rank {rank}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
