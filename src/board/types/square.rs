//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (file, rank).
///
/// Rank 0 is Black's back rank and rank 7 is White's, so the board reads
/// top to bottom the way it is displayed. The tuple constructor does not
/// bounds-check; use [`Square::new`] or `TryFrom` when the input is untrusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (file, rank)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        let sq = Square(file, rank);
        sq.is_valid().then_some(sq)
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0
    }

    /// Get the rank (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Step by a signed (file, rank) delta, returning `None` off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, df: isize, dr: isize) -> Option<Self> {
        let file = self.0.checked_add_signed(df)?;
        let rank = self.1.checked_add_signed(dr)?;
        Square::new(file, rank)
    }

    /// Get the square's index (0-63, a8=0, b8=1, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.1 * 8 + self.0
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx % 8, idx / 8)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, 8 - self.1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.1, self.0).cmp(&(other.1, other.0))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square(file, rank))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse algebraic notation, e.g. `"e1"` is `Square(4, 7)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let file = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => return Err(invalid()),
        };

        let rank = match chars[1] {
            '1'..='8' => 8 - (chars[1] as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(file, rank))
    }
}
