use std::fmt;
use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, Piece, Square};

const EMPTY_CELL: char = '.';

impl Board {
    /// Parse a board from layout text.
    ///
    /// The layout has one line per rank, rank 0 (Black's back rank) first.
    /// Each line holds eight cells: `PNBRQK` for White, `pnbrqk` for Black
    /// and `.` for an empty square. Blank lines and surrounding whitespace
    /// are ignored.
    pub fn try_from_layout(layout: &str) -> Result<Self, LayoutError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        for (rank, line) in ranks.iter().enumerate() {
            let found = line.chars().count();
            if found != 8 {
                return Err(LayoutError::WrongFileCount { rank, found });
            }
            for (file, c) in line.chars().enumerate() {
                if c == EMPTY_CELL {
                    continue;
                }
                let contents = Piece::from_layout_char(c)
                    .ok_or(LayoutError::InvalidPiece { char: c, rank, file })?;
                board.set(Square(file, rank), Some(contents));
            }
        }

        Ok(board)
    }

    /// Parse a board from layout text.
    ///
    /// # Panics
    /// Panics if the layout is invalid. Use `try_from_layout` for fallible parsing.
    #[must_use]
    pub fn from_layout(layout: &str) -> Self {
        Self::try_from_layout(layout).expect("Invalid board layout")
    }

    /// Render the board as layout text, one newline-terminated line per rank.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in 0..8 {
            for file in 0..8 {
                let c = match self.get(Square(file, rank)) {
                    Some((color, piece)) => piece.to_layout_char(color),
                    None => EMPTY_CELL,
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_layout(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_layout())
    }
}
