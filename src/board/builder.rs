//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing layout text.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(4, 7), Color::White, Piece::King)
//!     .piece(Square(4, 0), Color::Black, Piece::King)
//!     .piece(Square(0, 6), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.put(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(Square(4, 7), Color::White, Piece::King)
            .piece(Square(4, 0), Color::Black, Piece::King)
            .build();

        assert!(board.get(Square(4, 7)).is_some());
        assert!(board.get(Square(4, 0)).is_some());
        assert!(board.get(Square(0, 0)).is_none());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, Piece::Knight)
            .piece(Square(3, 3), Color::Black, Piece::Bishop)
            .build();
        assert_eq!(board.get(Square(3, 3)), Some((Color::Black, Piece::Bishop)));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(0, 7)) // white rook on a1
            .build();

        assert!(board.get(Square(0, 7)).is_none());
        assert!(board.get(Square(1, 7)).is_some());
    }
}
