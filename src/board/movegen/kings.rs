use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, MoveSet, Piece, Square};

const KING_HOME_FILE: usize = 4;

/// Rook relocation for a castling king move: `(rook_from, rook_to)`.
///
/// Returns `None` unless the king moves exactly two files along a rank.
pub(crate) fn castle_rook_squares(king_from: Square, king_to: Square) -> Option<(Square, Square)> {
    if king_from.rank() != king_to.rank() {
        return None;
    }
    let rank = king_from.rank();
    match king_to.file() as isize - king_from.file() as isize {
        2 => Some((Square(7, rank), Square(king_to.file() - 1, rank))),
        -2 => Some((Square(0, rank), Square(king_to.file() + 1, rank))),
        _ => None,
    }
}

impl Board {
    pub(crate) fn king_destinations(&self, from: Square, color: Color) -> MoveSet {
        let mut moves: MoveSet = KING_TARGETS[from.as_index()]
            .iter()
            .copied()
            .filter(|&to| self.can_land_on(to, color))
            .collect();

        // Eligibility is positional only; the board cannot tell whether the
        // king or rook has moved before.
        let back_rank = color.back_rank();
        if from == Square(KING_HOME_FILE, back_rank) {
            if self.is_empty(Square(5, back_rank))
                && self.is_empty(Square(6, back_rank))
                && self.get(Square(7, back_rank)) == Some((color, Piece::Rook))
            {
                moves.insert(Square(6, back_rank));
            }
            if self.is_empty(Square(1, back_rank))
                && self.is_empty(Square(2, back_rank))
                && self.is_empty(Square(3, back_rank))
                && self.get(Square(0, back_rank)) == Some((color, Piece::Rook))
            {
                moves.insert(Square(2, back_rank));
            }
        }

        moves
    }
}
