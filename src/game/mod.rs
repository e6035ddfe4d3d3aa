//! Game session: board ownership, turn order, selection and game end.
//!
//! The board rules know nothing about whose turn it is. A [`Game`] adds the
//! session state around them: White moves first, turns alternate after each
//! applied move, and the game ends as soon as either king has been captured.
//! There is no check or checkmate detection.
//!
//! # Example
//! ```
//! use chess_rules::board::{MoveOutcome, Square};
//! use chess_rules::game::{ClickResult, Game};
//!
//! let mut game = Game::new();
//! assert_eq!(game.click(Square(4, 6)), ClickResult::Selected); // e2
//! assert_eq!(game.click(Square(4, 4)), ClickResult::Moved(MoveOutcome::Quiet)); // e4
//! ```

mod error;
mod random;
mod selection;
mod shared;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, MoveError, MoveOutcome, MoveSet, Piece, Square};

pub use error::GameError;
pub use random::random_move;
pub use selection::{ClickResult, Selection};
pub use shared::SharedGame;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameResult {
    pub winner: Color,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wins", self.winner)
    }
}

/// One applied move, as recorded in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayedMove {
    pub color: Color,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub outcome: MoveOutcome,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    selection: Selection,
    result: Option<GameResult>,
    history: Vec<PlayedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Start from an arbitrary position. A position already missing a king
    /// is immediately over.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut game = Game {
            board,
            turn,
            selection: Selection::Idle,
            result: None,
            history: Vec::new(),
        };
        game.update_result();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Squares a renderer should highlight for the current selection.
    pub fn highlighted(&self) -> Option<&MoveSet> {
        self.selection.destinations()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Select-then-move interaction for a clicked square.
    ///
    /// Idle: a piece of the side to move is selected. Selected: a cached
    /// destination is played, anything else drops the selection.
    pub fn click(&mut self, square: Square) -> ClickResult {
        if self.is_over() {
            return ClickResult::Ignored;
        }

        match std::mem::take(&mut self.selection) {
            Selection::Idle => {
                if self.board.color_on(square) != Some(self.turn) {
                    return ClickResult::Ignored;
                }
                match self.board.legal_destinations(square) {
                    Ok(destinations) => {
                        self.selection = Selection::Selected {
                            origin: square,
                            destinations,
                        };
                        ClickResult::Selected
                    }
                    Err(_) => ClickResult::Ignored,
                }
            }
            Selection::Selected {
                origin,
                destinations,
            } => {
                if !destinations.contains(&square) {
                    return ClickResult::Deselected;
                }
                match self.play(origin, square) {
                    Ok(outcome) => ClickResult::Moved(outcome),
                    Err(_err) => {
                        #[cfg(feature = "logging")]
                        log::trace!("click on {square} refused: {_err}");
                        ClickResult::Deselected
                    }
                }
            }
        }
    }

    /// Play a move for the side to move and hand the turn over.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        if let Some(result) = self.result {
            return Err(GameError::GameOver { result });
        }
        let (color, piece) = self
            .board
            .get(from)
            .ok_or(MoveError::InvalidOrigin { square: from })?;
        if color != self.turn {
            return Err(GameError::NotYourTurn {
                square: from,
                turn: self.turn,
            });
        }

        let outcome = self.board.apply(from, to)?;
        self.history.push(PlayedMove {
            color,
            piece,
            from,
            to,
            outcome,
        });
        self.selection = Selection::Idle;
        self.turn = self.turn.opponent();
        self.update_result();
        Ok(outcome)
    }

    fn update_result(&mut self) {
        let winner = if !self.board.is_king_present(Color::White) {
            Some(Color::Black)
        } else if !self.board.is_king_present(Color::Black) {
            Some(Color::White)
        } else {
            None
        };
        self.result = winner.map(|winner| GameResult { winner });

        #[cfg(feature = "logging")]
        {
            if let Some(result) = self.result {
                log::debug!("game over after {} moves: {result}", self.history.len());
            }
        }
    }
}
