//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece legal destinations
//! - `apply.rs` - Move application and compound effects
//! - `edge_cases.rs` - Board edges, missing kings, bad input
//! - `proptest.rs` - Property-based tests

mod apply;

use crate::board::{Board, Square};

/// Parse a list of algebraic squares, e.g. `squares(&["e3", "e4"])`.
pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    names.iter().map(|n| n.parse().unwrap()).collect()
}

pub(super) fn destinations(board: &Board, origin: &str) -> Vec<Square> {
    board
        .legal_destinations(origin.parse().unwrap())
        .unwrap()
        .into_iter()
        .collect()
}

pub(super) fn sorted(mut sqs: Vec<Square>) -> Vec<Square> {
    sqs.sort();
    sqs
}
