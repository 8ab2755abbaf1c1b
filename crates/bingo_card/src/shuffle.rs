//! Randomized redistribution of items across their current cells.

use crate::{Board, CardConfiguration, CardError, Item};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Shuffles which item sits in which occupied cell.
///
/// The set of occupied positions is kept as-is: empty cells stay empty and
/// the FREE cell never moves. Items travel with their completion flag.
/// The permutation is a Fisher-Yates shuffle driven by `rng`, so a seeded
/// generator gives a repeatable layout. Returned items are sorted by position.
#[instrument(skip(items, rng), fields(items = items.len()))]
pub fn shuffle<R: Rng + ?Sized>(
    config: &CardConfiguration,
    items: &[Item],
    rng: &mut R,
) -> Result<Vec<Item>, CardError> {
    config.ensure_draft()?;
    Board::from_card(config, items)?;

    let mut slots: Vec<Item> = items.to_vec();
    slots.sort_by_key(Item::position);
    let positions: Vec<_> = slots.iter().map(Item::position).collect();

    slots.shuffle(rng);
    let shuffled: Vec<Item> = slots
        .into_iter()
        .zip(positions)
        .map(|(item, pos)| item.moved_to(pos))
        .collect();

    #[cfg(debug_assertions)]
    crate::invariants::verify(&crate::CardView::new(config, &shuffled))?;

    debug!(count = shuffled.len(), "Shuffled items");
    Ok(shuffled)
}
