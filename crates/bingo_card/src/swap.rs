//! Two-position exchange, aware of the FREE cell.

use crate::placement::move_free;
use crate::{CardConfiguration, CardError, Item, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A configuration with its items after a layout change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Updated configuration.
    pub config: CardConfiguration,
    /// Updated items.
    pub items: Vec<Item>,
}

/// Exchanges the contents of two cells.
///
/// - Neither cell is FREE: occupants trade places (an item may move into an
///   empty cell; two empty cells is a no-op).
/// - One cell is FREE: the FREE cell moves to the other one, with the usual
///   displacement rules. This can fail with [`CardError::CardFull`].
/// - Both name the FREE cell: no-op.
#[instrument(skip(items, rng), fields(items = items.len()))]
pub fn swap<R: Rng + ?Sized>(
    config: &CardConfiguration,
    items: &[Item],
    a: Position,
    b: Position,
    rng: &mut R,
) -> Result<Layout, CardError> {
    config.ensure_draft()?;
    let size = config.grid_size();
    size.check_position(a)?;
    size.check_position(b)?;

    match (config.is_free(a), config.is_free(b)) {
        (true, true) => {
            debug!(%a, "Swap of FREE cell with itself");
            Ok(unchanged(config, items))
        }
        (true, false) => free_swap(config, items, b, rng),
        (false, true) => free_swap(config, items, a, rng),
        (false, false) => {
            crate::Board::from_card(config, items)?;
            if a == b {
                return Ok(unchanged(config, items));
            }
            let swapped: Vec<Item> = items
                .iter()
                .map(|item| match item.position() {
                    p if p == a => item.clone().moved_to(b),
                    p if p == b => item.clone().moved_to(a),
                    _ => item.clone(),
                })
                .collect();

            #[cfg(debug_assertions)]
            crate::invariants::verify(&crate::CardView::new(config, &swapped))?;

            debug!(%a, %b, "Swapped cells");
            Ok(Layout {
                config: config.clone(),
                items: swapped,
            })
        }
    }
}

fn free_swap<R: Rng + ?Sized>(
    config: &CardConfiguration,
    items: &[Item],
    target: Position,
    rng: &mut R,
) -> Result<Layout, CardError> {
    let change = move_free(config, items, target, rng)?;
    Ok(Layout {
        config: change.config,
        items: change.items,
    })
}

fn unchanged(config: &CardConfiguration, items: &[Item]) -> Layout {
    Layout {
        config: config.clone(),
        items: items.to_vec(),
    }
}
