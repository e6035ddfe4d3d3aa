//! Precomputed jump targets for leaper pieces (knights, kings) and the
//! direction sets shared by the sliders.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

fn jump_table(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect()
    })
}

/// On-board knight targets for each square index.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| jump_table(&KNIGHT_DELTAS));

/// On-board king step targets for each square index (castling excluded).
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| jump_table(&KING_DELTAS));
