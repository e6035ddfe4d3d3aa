use super::super::{Board, Color, MoveSet, Square};

impl Board {
    /// Pushes never capture; diagonals only capture. No en passant.
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color) -> MoveSet {
        let mut moves = MoveSet::new();
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(0, dir) {
            if self.is_empty(one) {
                moves.insert(one);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(0, dir) {
                        if self.is_empty(two) {
                            moves.insert(two);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(diag) = from.offset(df, dir) {
                if self.color_on(diag) == Some(color.opponent()) {
                    moves.insert(diag);
                }
            }
        }

        moves
    }
}
