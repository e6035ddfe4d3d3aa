use rand::seq::SliceRandom;
use rand::Rng;

use super::{Game, GameError};
use crate::board::{Board, Color, MoveOutcome, Square};

/// Pick a uniformly random legal move for `color`, or `None` if it has none.
pub fn random_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    rng: &mut R,
) -> Option<(Square, Square)> {
    board.all_moves(color).choose(rng).copied()
}

impl Game {
    /// Play a random legal move for the side to move.
    ///
    /// Returns `Ok(None)` when that side has no move at all.
    pub fn play_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<MoveOutcome>, GameError> {
        if let Some(result) = self.result() {
            return Err(GameError::GameOver { result });
        }
        match random_move(self.board(), self.turn(), rng) {
            Some((from, to)) => self.play(from, to).map(Some),
            None => Ok(None),
        }
    }
}
