//! Building a fresh draft from an existing card.

use crate::{Board, CardConfiguration, CardError, GridSize, Item, geometry};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A new draft built from a source card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClonedCard {
    /// Draft configuration for the target size.
    pub config: CardConfiguration,
    /// Copied items, all uncompleted.
    pub items: Vec<Item>,
    /// True if some source items did not fit.
    pub truncated: bool,
}

/// Copies a card's goals into a fresh draft of `target_size`.
///
/// Only item text is copied; completion always starts over. Items are taken
/// in source position order and each lands on a random empty cell. When the
/// target holds fewer items than the source, the rest are dropped and
/// `truncated` is set. A default header becomes the target size's default.
#[instrument(skip(source_items, rng), fields(source_items = source_items.len()))]
pub fn clone_card<R: Rng + ?Sized>(
    source: &CardConfiguration,
    source_items: &[Item],
    target_size: GridSize,
    target_has_free: bool,
    rng: &mut R,
) -> Result<ClonedCard, CardError> {
    Board::from_card(source, source_items)?;
    let header =
        geometry::resized_header_text(source.header_text(), source.grid_size(), target_size);
    let config = CardConfiguration::create(target_size, Some(&header), Some(target_has_free), rng)?;

    let mut empties: Vec<_> = target_size
        .positions()
        .filter(|pos| !config.is_free(*pos))
        .collect();

    let mut ordered: Vec<&Item> = source_items.iter().collect();
    ordered.sort_by_key(|item| item.position());

    let mut items = Vec::with_capacity(config.capacity().min(ordered.len()));
    for source_item in ordered.into_iter().take(config.capacity()) {
        let slot = rng.gen_range(0..empties.len());
        let pos = empties.swap_remove(slot);
        items.push(Item::new(pos, source_item.content()));
    }

    let truncated = source_items.len() > config.capacity();
    if truncated {
        warn!(
            copied = items.len(),
            dropped = source_items.len() - items.len(),
            "Target card too small; extra items dropped"
        );
    }

    #[cfg(debug_assertions)]
    crate::invariants::verify(&crate::CardView::new(&config, &items))?;

    info!(%target_size, copied = items.len(), truncated, "Card cloned");
    Ok(ClonedCard {
        config,
        items,
        truncated,
    })
}
