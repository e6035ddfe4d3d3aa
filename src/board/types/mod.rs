//! Core board types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - (file, rank) coordinate
//! - `MoveSet` - destinations a piece may reach
//! - `MoveOutcome` - what an applied move did

mod outcome;
mod piece;
mod square;

use std::collections::BTreeSet;

pub use outcome::MoveOutcome;
pub use piece::{Color, Piece};
pub use square::Square;

/// Destination squares for one piece, ordered by square index.
pub type MoveSet = BTreeSet<Square>;
