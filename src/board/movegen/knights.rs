use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, MoveSet, Square};

impl Board {
    pub(crate) fn knight_destinations(&self, from: Square, color: Color) -> MoveSet {
        KNIGHT_TARGETS[from.as_index()]
            .iter()
            .copied()
            .filter(|&to| self.can_land_on(to, color))
            .collect()
    }
}
