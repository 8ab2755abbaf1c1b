//! One-way draft to finalized transition.

use crate::{Board, CardConfiguration, CardError, CardPhase, Item};
use tracing::{info, instrument};

/// Finalizes a card, freezing its grid size, header and FREE cell.
///
/// Every non-FREE cell must be filled. There is no way back to draft.
#[instrument(skip(items), fields(items = items.len()))]
pub fn finalize(
    config: &CardConfiguration,
    items: &[Item],
) -> Result<CardConfiguration, CardError> {
    config.ensure_draft()?;
    Board::from_card(config, items)?;

    let need = config.capacity();
    if items.len() != need {
        return Err(CardError::CapacityNotMet {
            have: items.len(),
            need,
        });
    }

    info!(grid_size = %config.grid_size(), "Card finalized");
    Ok(config.clone().with_phase(CardPhase::Finalized))
}
