use super::error::MoveError;
use super::movegen::castle_rook_squares;
use super::{Board, MoveOutcome, Piece, Square};

impl Board {
    /// Move the piece on `origin` to `destination`, including the rook hop of
    /// a castle and auto-promotion of a pawn to a queen.
    ///
    /// The destination is checked against [`Board::legal_destinations`]
    /// first; on error the board is left untouched.
    pub fn apply(&mut self, origin: Square, destination: Square) -> Result<MoveOutcome, MoveError> {
        let legal = self.legal_destinations(origin)?;
        if !legal.contains(&destination) {
            #[cfg(feature = "logging")]
            log::trace!("rejected {origin}{destination}: not a legal destination");
            return Err(MoveError::IllegalMove {
                from: origin,
                to: destination,
            });
        }

        let captured = self.is_capture(origin, destination);
        let Some((color, piece)) = self.take(origin) else {
            return Err(MoveError::InvalidOrigin { square: origin });
        };
        self.put(destination, color, piece);

        let mut outcome = if captured {
            MoveOutcome::Capture
        } else {
            MoveOutcome::Quiet
        };

        if piece == Piece::King {
            if let Some((rook_from, rook_to)) = castle_rook_squares(origin, destination) {
                if let Some(rook) = self.take(rook_from) {
                    self.set(rook_to, Some(rook));
                }
                outcome = MoveOutcome::Castle;
            }
        }

        if piece == Piece::Pawn && destination.rank() == color.pawn_promotion_rank() {
            self.put(destination, color, Piece::Queen);
            outcome = MoveOutcome::Promotion;
        }

        #[cfg(feature = "logging")]
        log::debug!("{color} {piece} {origin}{destination} ({outcome})");

        Ok(outcome)
    }
}
