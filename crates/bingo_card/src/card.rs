//! Card snapshots: a configuration together with its items.

use crate::{CardConfiguration, Item};
use serde::{Deserialize, Serialize};

/// Owned snapshot of one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Grid, header, FREE cell and phase.
    pub config: CardConfiguration,
    /// Placed goals.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Card {
    /// Creates a card with no items.
    pub fn new(config: CardConfiguration) -> Self {
        Self {
            config,
            items: Vec::new(),
        }
    }

    /// Borrows this card as a view.
    pub fn view(&self) -> CardView<'_> {
        CardView::new(&self.config, &self.items)
    }
}

/// Borrowed view of a configuration and its items.
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    /// Card configuration.
    pub config: &'a CardConfiguration,
    /// Items placed on the card.
    pub items: &'a [Item],
}

impl<'a> CardView<'a> {
    /// Creates a view over borrowed parts.
    pub fn new(config: &'a CardConfiguration, items: &'a [Item]) -> Self {
        Self { config, items }
    }
}
