//! Board representation and move legality.
//!
//! A [`Board`] is a plain 8x8 grid of optional pieces. Legal destinations are
//! computed per piece from occupancy alone, and [`Board::apply`] commits a
//! chosen destination together with any castling or promotion side effect.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, MoveOutcome, Square};
//!
//! let mut board = Board::new();
//! let pawn = Square(4, 6); // e2
//! let moves = board.legal_destinations(pawn).unwrap();
//! assert_eq!(moves.len(), 2);
//! assert_eq!(board.apply(pawn, Square(4, 4)), Ok(MoveOutcome::Quiet));
//! ```

mod apply;
mod attack_tables;
mod builder;
mod error;
mod layout;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{LayoutError, MoveError, SquareError};
pub use state::Board;
pub use types::{Color, MoveOutcome, MoveSet, Piece, Square};
