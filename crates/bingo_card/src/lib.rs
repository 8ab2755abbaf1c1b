//! Bingo card layout engine.
//!
//! Pure, synchronous logic for a square card of personal goals: grid
//! geometry, the optional FREE cell, placing and displacing items,
//! shuffling, swapping, bingo-line detection and the one-way
//! draft → finalized transition.
//!
//! Every operation borrows a `(CardConfiguration, &[Item])` snapshot and
//! returns a new snapshot or a [`CardError`]; inputs are never mutated, so
//! a failed call leaves nothing half-applied. Randomness is always passed
//! in, either per call or through a [`CardEngine`].
//!
//! # Example
//!
//! ```
//! use bingo_card::{CardEngine, GridSize, Item};
//!
//! let mut engine = CardEngine::seeded(7);
//! let config = engine.create_configuration(GridSize::Three, None, None)?;
//! let mut items: Vec<Item> = Vec::new();
//! for goal in ["Run", "Read", "Cook", "Swim", "Draw", "Sing", "Hike", "Knit"] {
//!     items = engine.add_item(&config, &items, goal, None)?;
//! }
//! let config = engine.finalize(&config, &items)?;
//! assert!(config.is_finalized());
//! assert!(engine.detect_bingos(&config, &items).is_empty());
//! # Ok::<(), bingo_card::CardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bingo;
mod board;
mod card;
mod cloning;
mod config;
mod editing;
mod engine;
mod error;
mod finalize;
mod geometry;
mod item;
mod phases;
mod placement;
mod shuffle;
mod swap;

pub mod invariants;

pub use bingo::{BingoLine, LineKind, all_lines, detect_bingos};
pub use board::{Board, Cell};
pub use card::{Card, CardView};
pub use cloning::{ClonedCard, clone_card};
pub use config::{CardConfiguration, FreeSpace};
pub use editing::{add_item, change_grid_size, remove_item, set_completed, set_header_text};
pub use engine::CardEngine;
pub use error::CardError;
pub use finalize::finalize;
pub use geometry::{
    GridSize, Position, is_valid_grid_size, is_valid_item_position, validate_header_text,
};
pub use item::{Displacement, Item};
pub use phases::CardPhase;
pub use placement::{FreeChange, disable_free, enable_free, move_free};
pub use shuffle::shuffle;
pub use swap::{Layout, swap};
