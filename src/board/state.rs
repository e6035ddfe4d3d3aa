#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Piece occupancy of the 8x8 grid, indexed `[rank][file]`.
///
/// The board keeps no history: castling eligibility and every other rule is
/// derived from the current occupancy alone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.put(Square(file, Color::Black.back_rank()), Color::Black, *piece);
            board.put(Square(file, Color::White.back_rank()), Color::White, *piece);
            board.put(Square(file, Color::Black.pawn_start_rank()), Color::Black, Piece::Pawn);
            board.put(Square(file, Color::White.pawn_start_rank()), Color::White, Piece::Pawn);
        }
        board
    }

    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(&self, sq: Square) -> bool {
        sq.is_valid()
    }

    /// Contents of a square; off-board squares read as empty.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<(Color, Piece)> {
        if !sq.is_valid() {
            return None;
        }
        self.squares[sq.rank()][sq.file()]
    }

    /// Overwrite a square. Writes to off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, sq: Square, contents: Option<(Color, Piece)>) {
        if sq.is_valid() {
            self.squares[sq.rank()][sq.file()] = contents;
        }
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.set(sq, Some((color, piece)));
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let contents = self.get(sq);
        self.set(sq, None);
        contents
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.get(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|(color, _)| color)
    }

    /// Squares holding a piece of `color`, in index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.color_on(sq) == Some(color))
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.get(sq) == Some((color, Piece::King)))
    }

    /// A missing king means that side has lost; it is not an error here.
    #[must_use]
    pub fn is_king_present(&self, color: Color) -> bool {
        self.find_king(color).is_some()
    }
}
