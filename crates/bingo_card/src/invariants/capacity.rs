//! Capacity invariant: a card never holds more items than it has room for.

use super::Invariant;
use crate::CardView;

/// Invariant: item count does not exceed capacity.
pub struct WithinCapacityInvariant;

impl<'a> Invariant<CardView<'a>> for WithinCapacityInvariant {
    fn holds(card: &CardView<'a>) -> bool {
        card.items.len() <= card.config.capacity()
    }

    fn description() -> &'static str {
        "Item count is within capacity"
    }
}
