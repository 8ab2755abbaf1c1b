//! Position invariants: items lie on the grid and never share a cell.

use super::Invariant;
use crate::CardView;
use std::collections::HashSet;

/// Invariant: every item position lies on the grid.
pub struct PositionsInRangeInvariant;

impl<'a> Invariant<CardView<'a>> for PositionsInRangeInvariant {
    fn holds(card: &CardView<'a>) -> bool {
        let size = card.config.grid_size();
        card.items.iter().all(|item| size.contains(item.position()))
    }

    fn description() -> &'static str {
        "Item positions lie on the grid"
    }
}

/// Invariant: no two items share a position.
pub struct PositionsUniqueInvariant;

impl<'a> Invariant<CardView<'a>> for PositionsUniqueInvariant {
    fn holds(card: &CardView<'a>) -> bool {
        let mut seen = HashSet::with_capacity(card.items.len());
        card.items.iter().all(|item| seen.insert(item.position()))
    }

    fn description() -> &'static str {
        "Item positions are unique"
    }
}
