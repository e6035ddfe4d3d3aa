use super::super::{Board, Color, MoveSet, Square};

impl Board {
    /// Ray-cast along each direction until the board edge or the first
    /// occupied square, which is included only when it holds an enemy piece.
    pub(crate) fn ray_destinations(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> MoveSet {
        let mut moves = MoveSet::new();
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(next) = current.offset(df, dr) {
                match self.color_on(next) {
                    None => {
                        moves.insert(next);
                        current = next;
                    }
                    Some(occupant) => {
                        if occupant != color {
                            moves.insert(next);
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}
