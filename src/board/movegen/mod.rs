mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castle_rook_squares;

use super::attack_tables::{ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};
use super::error::MoveError;
use super::{Board, Color, MoveSet, Piece, Square};

impl Board {
    /// Destinations the piece on `origin` may move to.
    ///
    /// Computation is pure. Self-check is not considered: a move that leaves
    /// the mover's own king attacked is still returned.
    pub fn legal_destinations(&self, origin: Square) -> Result<MoveSet, MoveError> {
        let (color, piece) = self
            .get(origin)
            .ok_or(MoveError::InvalidOrigin { square: origin })?;

        let destinations = match piece {
            Piece::Pawn => self.pawn_destinations(origin, color),
            Piece::Knight => self.knight_destinations(origin, color),
            Piece::Bishop => self.ray_destinations(origin, color, &DIAGONAL),
            Piece::Rook => self.ray_destinations(origin, color, &ORTHOGONAL),
            Piece::Queen => self.ray_destinations(origin, color, &ALL_DIRECTIONS),
            Piece::King => self.king_destinations(origin, color),
        };
        Ok(destinations)
    }

    /// Whether moving from `origin` to `destination` would capture, read from
    /// current occupancy. Castling never captures.
    #[must_use]
    pub fn is_capture(&self, origin: Square, destination: Square) -> bool {
        match (self.color_on(origin), self.color_on(destination)) {
            (Some(mover), Some(target)) => mover != target,
            _ => false,
        }
    }

    /// Every (origin, destination) pair available to `color`.
    #[must_use]
    pub fn all_moves(&self, color: Color) -> Vec<(Square, Square)> {
        self.pieces(color)
            .flat_map(|from| {
                self.legal_destinations(from)
                    .unwrap_or_default()
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// Single-step keep rule: on board and not holding a piece of `color`.
    #[inline]
    pub(crate) fn can_land_on(&self, target: Square, color: Color) -> bool {
        target.is_valid() && self.color_on(target) != Some(color)
    }
}
