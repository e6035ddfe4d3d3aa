use crate::board::{MoveOutcome, MoveSet, Square};

/// Input-side selection state: nothing picked, or a piece picked together
/// with the destinations computed when it was picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        origin: Square,
        destinations: MoveSet,
    },
}

impl Selection {
    #[must_use]
    pub fn origin(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected { origin, .. } => Some(*origin),
        }
    }

    /// Destinations to highlight, `None` when idle.
    #[must_use]
    pub fn destinations(&self) -> Option<&MoveSet> {
        match self {
            Selection::Idle => None,
            Selection::Selected { destinations, .. } => Some(destinations),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// What a click did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickResult {
    /// A piece of the side to move was picked up.
    Selected,
    /// The pending selection was dropped without moving.
    Deselected,
    /// The selected piece moved.
    Moved(MoveOutcome),
    /// Nothing happened (empty square, opponent piece, or game over).
    Ignored,
}
