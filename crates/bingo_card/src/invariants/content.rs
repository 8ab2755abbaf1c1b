//! Content invariant: every goal has text.

use super::Invariant;
use crate::CardView;

/// Invariant: no item has blank content.
pub struct ContentNonEmptyInvariant;

impl<'a> Invariant<CardView<'a>> for ContentNonEmptyInvariant {
    fn holds(card: &CardView<'a>) -> bool {
        card.items.iter().all(|item| !item.content().trim().is_empty())
    }

    fn description() -> &'static str {
        "Every item has non-empty content"
    }
}
