//! Card engine: the operation set with an owned random source.
//!
//! Callers that do not want to thread a generator through every call hold
//! one `CardEngine` and invoke operations on snapshots. Tests seed it for
//! repeatable placements.

use crate::{
    BingoLine, CardConfiguration, CardError, ClonedCard, FreeChange, GridSize, Item, Layout,
    Position, bingo, cloning, editing, finalize, placement, shuffle, swap,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Stateless card operations sharing one injected random source.
#[derive(Debug, Clone)]
pub struct CardEngine<R> {
    rng: R,
}

impl CardEngine<StdRng> {
    /// Creates an engine with a deterministic generator.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates an engine seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> CardEngine<R> {
    /// Creates an engine around the given generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Creates a draft configuration.
    pub fn create_configuration(
        &mut self,
        grid_size: GridSize,
        header_text: Option<&str>,
        has_free_space: Option<bool>,
    ) -> Result<CardConfiguration, CardError> {
        CardConfiguration::create(grid_size, header_text, has_free_space, &mut self.rng)
    }

    /// Enables the FREE cell, displacing an item if needed.
    pub fn enable_free(
        &mut self,
        config: &CardConfiguration,
        items: &[Item],
    ) -> Result<FreeChange, CardError> {
        placement::enable_free(config, items, &mut self.rng)
    }

    /// Disables the FREE cell.
    pub fn disable_free(&self, config: &CardConfiguration) -> Result<CardConfiguration, CardError> {
        placement::disable_free(config)
    }

    /// Moves the FREE cell, displacing an item if needed.
    pub fn move_free(
        &mut self,
        config: &CardConfiguration,
        items: &[Item],
        target: Position,
    ) -> Result<FreeChange, CardError> {
        placement::move_free(config, items, target, &mut self.rng)
    }

    /// Shuffles items across their occupied cells.
    pub fn shuffle(
        &mut self,
        config: &CardConfiguration,
        items: &[Item],
    ) -> Result<Vec<Item>, CardError> {
        shuffle::shuffle(config, items, &mut self.rng)
    }

    /// Swaps the contents of two cells.
    pub fn swap(
        &mut self,
        config: &CardConfiguration,
        items: &[Item],
        a: Position,
        b: Position,
    ) -> Result<Layout, CardError> {
        swap::swap(config, items, a, b, &mut self.rng)
    }

    /// Lists completed lines.
    pub fn detect_bingos(&self, config: &CardConfiguration, items: &[Item]) -> Vec<BingoLine> {
        bingo::detect_bingos(config, items)
    }

    /// Finalizes a full card.
    pub fn finalize(
        &self,
        config: &CardConfiguration,
        items: &[Item],
    ) -> Result<CardConfiguration, CardError> {
        finalize::finalize(config, items)
    }

    /// Copies a card's goals into a new draft.
    pub fn clone_card(
        &mut self,
        config: &CardConfiguration,
        items: &[Item],
        target_size: GridSize,
        target_has_free: bool,
    ) -> Result<ClonedCard, CardError> {
        cloning::clone_card(config, items, target_size, target_has_free, &mut self.rng)
    }

    /// Replaces the header text.
    pub fn set_header_text(
        &self,
        config: &CardConfiguration,
        text: &str,
    ) -> Result<CardConfiguration, CardError> {
        editing::set_header_text(config, text)
    }

    /// Changes the grid size of an empty draft.
    pub fn change_grid_size(
        &mut self,
        config: &CardConfiguration,
        items: &[Item],
        size: GridSize,
    ) -> Result<CardConfiguration, CardError> {
        editing::change_grid_size(config, items, size, &mut self.rng)
    }

    /// Adds an item at a position or a random empty cell.
    pub fn add_item(
        &mut self,
        config: &CardConfiguration,
        items: &[Item],
        content: &str,
        position: Option<Position>,
    ) -> Result<Vec<Item>, CardError> {
        editing::add_item(config, items, content, position, &mut self.rng)
    }

    /// Removes the item at a position.
    pub fn remove_item(
        &self,
        config: &CardConfiguration,
        items: &[Item],
        position: Position,
    ) -> Result<Vec<Item>, CardError> {
        editing::remove_item(config, items, position)
    }

    /// Sets the completion flag of the item at a position.
    pub fn set_completed(
        &self,
        config: &CardConfiguration,
        items: &[Item],
        position: Position,
        completed: bool,
    ) -> Result<Vec<Item>, CardError> {
        editing::set_completed(config, items, position, completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = CardEngine::seeded(5);
        let mut b = CardEngine::seeded(5);
        let ca = a.create_configuration(GridSize::Four, None, None).unwrap();
        let cb = b.create_configuration(GridSize::Four, None, None).unwrap();
        assert_eq!(ca, cb);
    }

    #[test]
    fn test_engine_lifecycle() {
        let mut engine = CardEngine::seeded(1);
        let config = engine.create_configuration(GridSize::Two, Some("go"), None).unwrap();
        let mut items: Vec<Item> = Vec::new();
        for goal in ["Run", "Read", "Rest"] {
            items = engine.add_item(&config, &items, goal, None).unwrap();
        }
        let config = engine.finalize(&config, &items).unwrap();
        assert_eq!(engine.disable_free(&config), Err(CardError::AlreadyFinalized));
        assert_eq!(engine.set_header_text(&config, "no"), Err(CardError::AlreadyFinalized));
    }
}
