use std::sync::Arc;

use parking_lot::Mutex;

use super::{ClickResult, Game, GameError};
use crate::board::{Board, MoveOutcome, Square};

/// Cloneable handle to one game. Every call takes the game lock, so calls
/// from different threads are applied one at a time.
#[derive(Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    pub fn click(&self, square: Square) -> ClickResult {
        self.inner.lock().click(square)
    }

    pub fn play(&self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        self.inner.lock().play(from, to)
    }

    /// Copy of the current board, e.g. for rendering outside the lock.
    pub fn snapshot(&self) -> Board {
        self.inner.lock().board().clone()
    }

    /// Run `f` with the game locked.
    pub fn with<T>(&self, f: impl FnOnce(&mut Game) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
