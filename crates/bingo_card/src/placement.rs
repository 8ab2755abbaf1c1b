//! FREE cell placement: enabling, disabling and moving it.
//!
//! Enabling or moving FREE onto an occupied cell displaces that item to a
//! random empty cell. If no empty cell exists the operation fails with
//! [`CardError::CardFull`] and nothing changes.

use crate::{
    Board, CardConfiguration, CardError, Cell, Displacement, FreeSpace, GridSize, Item, Position,
};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of a FREE cell change: the new snapshot plus any displaced item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeChange {
    /// Updated configuration.
    pub config: CardConfiguration,
    /// Updated items.
    pub items: Vec<Item>,
    /// Item moved out of the FREE cell's way, if any.
    pub displaced: Option<Displacement>,
}

/// Picks where a newly enabled FREE cell goes.
///
/// Odd grids use the center. Even grids use a random empty cell.
pub(crate) fn free_target<R: Rng + ?Sized>(
    size: GridSize,
    board: &Board,
    rng: &mut R,
) -> Result<Position, CardError> {
    match size.center_position() {
        Some(center) => Ok(center),
        None => board
            .empty_positions()
            .choose(rng)
            .copied()
            .ok_or(CardError::CardFull),
    }
}

/// Picks a random empty cell, skipping `exclude`.
pub(crate) fn random_empty<R: Rng + ?Sized>(
    board: &Board,
    exclude: Position,
    rng: &mut R,
) -> Option<Position> {
    let candidates: Vec<Position> = board
        .empty_positions()
        .into_iter()
        .filter(|pos| *pos != exclude)
        .collect();
    candidates.choose(rng).copied()
}

/// Clears `target` for the FREE cell, moving its item if there is one.
fn clear_for_free<R: Rng + ?Sized>(
    board: &Board,
    items: &[Item],
    target: Position,
    rng: &mut R,
) -> Result<(Vec<Item>, Option<Displacement>), CardError> {
    match board.get(target) {
        Some(Cell::Item(idx)) => {
            let dest = random_empty(board, target, rng).ok_or(CardError::CardFull)?;
            let content = items[idx].content().to_string();
            debug!(%target, %dest, %content, "Displacing item for FREE cell");
            let moved = items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    if i == idx {
                        item.clone().moved_to(dest)
                    } else {
                        item.clone()
                    }
                })
                .collect();
            Ok((moved, Some(Displacement::new(content, target, dest))))
        }
        _ => Ok((items.to_vec(), None)),
    }
}

/// Enables the FREE cell.
///
/// The target is the center on 3x3 and 5x5 grids and a random empty cell on
/// 2x2 and 4x4 grids.
#[instrument(skip(items, rng), fields(items = items.len()))]
pub fn enable_free<R: Rng + ?Sized>(
    config: &CardConfiguration,
    items: &[Item],
    rng: &mut R,
) -> Result<FreeChange, CardError> {
    config.ensure_draft()?;
    if config.has_free_space() {
        return Err(CardError::AlreadyEnabled);
    }

    let board = Board::from_card(config, items)?;
    let target = free_target(config.grid_size(), &board, rng)?;
    let (items, displaced) = clear_for_free(&board, items, target, rng)?;
    let config = config.clone().with_free_space(FreeSpace::Enabled(target));

    #[cfg(debug_assertions)]
    crate::invariants::verify(&crate::CardView::new(&config, &items))?;

    info!(%target, displaced = displaced.is_some(), "FREE space enabled");
    Ok(FreeChange {
        config,
        items,
        displaced,
    })
}

/// Disables the FREE cell. The cell becomes empty and no items move.
#[instrument]
pub fn disable_free(config: &CardConfiguration) -> Result<CardConfiguration, CardError> {
    config.ensure_draft()?;
    if !config.has_free_space() {
        return Err(CardError::NotEnabled);
    }
    info!("FREE space disabled");
    Ok(config.clone().with_free_space(FreeSpace::Disabled))
}

/// Moves the FREE cell to `target`, displacing an item there if needed.
///
/// Moving onto the current FREE cell is a no-op.
#[instrument(skip(items, rng), fields(items = items.len()))]
pub fn move_free<R: Rng + ?Sized>(
    config: &CardConfiguration,
    items: &[Item],
    target: Position,
    rng: &mut R,
) -> Result<FreeChange, CardError> {
    config.ensure_draft()?;
    let current = config.free_space_position().ok_or(CardError::NotEnabled)?;
    config.grid_size().check_position(target)?;

    if current == target {
        debug!(%target, "FREE already at target");
        return Ok(FreeChange {
            config: config.clone(),
            items: items.to_vec(),
            displaced: None,
        });
    }

    let board = Board::from_card(config, items)?;
    let (items, displaced) = clear_for_free(&board, items, target, rng)?;
    let config = config.clone().with_free_space(FreeSpace::Enabled(target));

    #[cfg(debug_assertions)]
    crate::invariants::verify(&crate::CardView::new(&config, &items))?;

    info!(from = %current, to = %target, displaced = displaced.is_some(), "FREE space moved");
    Ok(FreeChange {
        config,
        items,
        displaced,
    })
}
