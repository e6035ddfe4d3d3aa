//! Result tag of an applied move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What kind of board change an applied move produced.
///
/// When several apply, the most specific wins:
/// `Promotion` > `Castle` > `Capture` > `Quiet`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    Quiet,
    Capture,
    Castle,
    Promotion,
}

impl MoveOutcome {
    /// True for castling and promotion, which touch more than the moved piece.
    #[inline]
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, MoveOutcome::Castle | MoveOutcome::Promotion)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Quiet => write!(f, "quiet"),
            MoveOutcome::Capture => write!(f, "capture"),
            MoveOutcome::Castle => write!(f, "castle"),
            MoveOutcome::Promotion => write!(f, "promotion"),
        }
    }
}
