//! Draft edits: header, grid size, adding and removing items, completion.

use crate::{Board, CardConfiguration, CardError, GridSize, Item, Position, geometry};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

/// Replaces the header text of a draft card.
#[instrument]
pub fn set_header_text(
    config: &CardConfiguration,
    text: &str,
) -> Result<CardConfiguration, CardError> {
    config.ensure_draft()?;
    let header = geometry::validate_header_text(text, config.grid_size())?;
    debug!(%header, "Header updated");
    Ok(config.clone().with_header_text(header))
}

/// Changes the grid size of a draft card that has no items yet.
///
/// The FREE cell is placed again under the new size. A default header
/// follows the new size; a custom one is kept if it still fits.
#[instrument(skip(items, rng), fields(items = items.len()))]
pub fn change_grid_size<R: Rng + ?Sized>(
    config: &CardConfiguration,
    items: &[Item],
    size: GridSize,
    rng: &mut R,
) -> Result<CardConfiguration, CardError> {
    config.ensure_draft()?;
    if !items.is_empty() {
        return Err(CardError::CardNotEmpty);
    }

    let header = geometry::resized_header_text(config.header_text(), config.grid_size(), size);
    let resized =
        CardConfiguration::create(size, Some(&header), Some(config.has_free_space()), rng)?;
    info!(from = %config.grid_size(), to = %size, "Grid size changed");
    Ok(resized)
}

/// Adds an item at `position`, or at a random empty cell when `None`.
#[instrument(skip(items, rng), fields(items = items.len()))]
pub fn add_item<R: Rng + ?Sized>(
    config: &CardConfiguration,
    items: &[Item],
    content: &str,
    position: Option<Position>,
    rng: &mut R,
) -> Result<Vec<Item>, CardError> {
    config.ensure_draft()?;
    let content = content.trim();
    if content.is_empty() {
        return Err(CardError::EmptyContent);
    }

    let board = Board::from_card(config, items)?;
    if board.is_full() {
        return Err(CardError::CardFull);
    }

    let position = match position {
        Some(pos) => {
            config.grid_size().check_position(pos)?;
            if !board.is_empty(pos) {
                return Err(CardError::PositionOccupied(pos));
            }
            pos
        }
        None => board
            .empty_positions()
            .choose(rng)
            .copied()
            .ok_or(CardError::CardFull)?,
    };

    let mut updated = items.to_vec();
    updated.push(Item::new(position, content));

    #[cfg(debug_assertions)]
    crate::invariants::verify(&crate::CardView::new(config, &updated))?;

    debug!(%position, "Item added");
    Ok(updated)
}

/// Removes the item at `position` from a draft card.
#[instrument(skip(items), fields(items = items.len()))]
pub fn remove_item(
    config: &CardConfiguration,
    items: &[Item],
    position: Position,
) -> Result<Vec<Item>, CardError> {
    config.ensure_draft()?;
    config.grid_size().check_position(position)?;
    if !items.iter().any(|i| i.position() == position) {
        return Err(CardError::PositionEmpty(position));
    }
    debug!(%position, "Item removed");
    Ok(items
        .iter()
        .filter(|i| i.position() != position)
        .cloned()
        .collect())
}

/// Marks the item at `position` completed or not. Allowed in any phase.
#[instrument(skip(items), fields(items = items.len()))]
pub fn set_completed(
    config: &CardConfiguration,
    items: &[Item],
    position: Position,
    completed: bool,
) -> Result<Vec<Item>, CardError> {
    config.grid_size().check_position(position)?;
    if !items.iter().any(|i| i.position() == position) {
        return Err(CardError::PositionEmpty(position));
    }
    debug!(%position, completed, "Completion updated");
    Ok(items
        .iter()
        .map(|i| {
            if i.position() == position {
                i.clone().completed(completed)
            } else {
                i.clone()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardPhase, FreeSpace};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(phase: CardPhase) -> CardConfiguration {
        CardConfiguration::from_parts(
            GridSize::Three,
            "BIN",
            FreeSpace::Enabled(Position::new(4)),
            phase,
        )
        .unwrap()
    }

    #[test]
    fn test_set_header_text() {
        let updated = set_header_text(&config(CardPhase::Draft), "yay").unwrap();
        assert_eq!(updated.header_text(), "YAY");
        assert_eq!(
            set_header_text(&config(CardPhase::Draft), "four"),
            Err(CardError::InvalidHeaderLength { len: 4, max: 3 })
        );
        assert_eq!(
            set_header_text(&config(CardPhase::Finalized), "ok"),
            Err(CardError::AlreadyFinalized)
        );
    }

    #[test]
    fn test_change_grid_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let resized =
            change_grid_size(&config(CardPhase::Draft), &[], GridSize::Five, &mut rng).unwrap();
        assert_eq!(resized.grid_size(), GridSize::Five);
        assert_eq!(resized.header_text(), "BINGO");
        assert_eq!(resized.free_space_position(), Some(Position::new(12)));

        let shrunk = change_grid_size(&resized, &[], GridSize::Two, &mut rng).unwrap();
        assert_eq!(shrunk.header_text(), "BI");

        let custom = set_header_text(&config(CardPhase::Draft), "yay").unwrap();
        let grown = change_grid_size(&custom, &[], GridSize::Four, &mut rng).unwrap();
        assert_eq!(grown.header_text(), "YAY");
    }

    #[test]
    fn test_change_grid_size_requires_empty_draft() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![Item::new(Position::new(0), "A")];
        assert_eq!(
            change_grid_size(&config(CardPhase::Draft), &items, GridSize::Four, &mut rng),
            Err(CardError::CardNotEmpty)
        );
        assert_eq!(
            change_grid_size(&config(CardPhase::Finalized), &[], GridSize::Four, &mut rng),
            Err(CardError::AlreadyFinalized)
        );
    }

    #[test]
    fn test_add_item_at_position() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = add_item(
            &config(CardPhase::Draft),
            &[],
            "  Learn piano ",
            Some(Position::new(2)),
            &mut rng,
        )
        .unwrap();
        assert_eq!(items, vec![Item::new(Position::new(2), "Learn piano")]);
    }

    #[test]
    fn test_add_item_rejects_bad_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = config(CardPhase::Draft);
        let items = vec![Item::new(Position::new(0), "A")];
        assert_eq!(
            add_item(&config, &items, "B", Some(Position::new(0)), &mut rng),
            Err(CardError::PositionOccupied(Position::new(0)))
        );
        assert_eq!(
            add_item(&config, &items, "B", Some(Position::new(4)), &mut rng),
            Err(CardError::PositionOccupied(Position::new(4)))
        );
        assert!(matches!(
            add_item(&config, &items, "B", Some(Position::new(9)), &mut rng),
            Err(CardError::PositionOutOfRange { .. })
        ));
        assert_eq!(
            add_item(&config, &items, "   ", None, &mut rng),
            Err(CardError::EmptyContent)
        );
    }

    #[test]
    fn test_add_items_until_full() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = config(CardPhase::Draft);
        let mut items: Vec<Item> = Vec::new();
        for i in 0..8 {
            items = add_item(&config, &items, &format!("Goal {}", i), None, &mut rng).unwrap();
        }
        assert!(items.iter().all(|i| i.position() != Position::new(4)));
        assert_eq!(add_item(&config, &items, "One more", None, &mut rng), Err(CardError::CardFull));
    }

    #[test]
    fn test_remove_item() {
        let config = config(CardPhase::Draft);
        let items = vec![Item::new(Position::new(0), "A"), Item::new(Position::new(1), "B")];
        let remaining = remove_item(&config, &items, Position::new(0)).unwrap();
        assert_eq!(remaining, vec![Item::new(Position::new(1), "B")]);
        assert_eq!(
            remove_item(&config, &remaining, Position::new(0)),
            Err(CardError::PositionEmpty(Position::new(0)))
        );
    }

    #[test]
    fn test_set_completed_after_finalize() {
        let config = config(CardPhase::Finalized);
        let items = vec![Item::new(Position::new(0), "A")];
        let updated = set_completed(&config, &items, Position::new(0), true).unwrap();
        assert!(updated[0].is_completed());
        assert_eq!(
            set_completed(&config, &items, Position::new(3), true),
            Err(CardError::PositionEmpty(Position::new(3)))
        );
    }
}
