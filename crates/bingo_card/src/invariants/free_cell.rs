//! FREE cell invariant: no item ever sits on the FREE cell.

use super::Invariant;
use crate::CardView;

/// Invariant: the FREE cell, when enabled, holds no item.
pub struct FreeCellVacantInvariant;

impl<'a> Invariant<CardView<'a>> for FreeCellVacantInvariant {
    fn holds(card: &CardView<'a>) -> bool {
        match card.config.free_space_position() {
            Some(free) => card.items.iter().all(|item| item.position() != free),
            None => true,
        }
    }

    fn description() -> &'static str {
        "FREE cell holds no item"
    }
}
