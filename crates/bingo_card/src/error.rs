//! Error type shared by every card operation.
//!
//! Each variant is a distinct, user-actionable failure. Operations that
//! return an error leave their inputs untouched.

use crate::Position;

/// Error that can occur when creating or editing a card.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CardError {
    /// Grid size outside the supported 2..=5 range.
    #[display("Grid size {} is not supported; choose 2, 3, 4 or 5", _0)]
    InvalidGridSize(u8),

    /// Header text is empty or longer than the grid is wide.
    #[display("Header must be between 1 and {} characters, got {}", max, len)]
    InvalidHeaderLength {
        /// Length of the rejected header, in characters.
        len: usize,
        /// Maximum allowed length (the grid size).
        max: usize,
    },

    /// Position does not exist on this grid.
    #[display("Position {} is outside the {}-square grid", position, total)]
    PositionOutOfRange {
        /// The rejected position.
        position: Position,
        /// Number of squares on the grid.
        total: usize,
    },

    /// Position already holds an item or the FREE cell.
    #[display("Position {} is already occupied", _0)]
    PositionOccupied(Position),

    /// Position holds no item.
    #[display("Position {} has no item", _0)]
    PositionEmpty(Position),

    /// No empty cell is left to relocate an item into.
    #[display("Card is full; remove an item to make room")]
    CardFull,

    /// FREE cell is already enabled.
    #[display("FREE space is already enabled")]
    AlreadyEnabled,

    /// FREE cell is not enabled.
    #[display("FREE space is not enabled")]
    NotEnabled,

    /// Finalize attempted before every cell is filled.
    #[display("Card needs {} items to finalize, has {}", need, have)]
    CapacityNotMet {
        /// Items currently on the card.
        have: usize,
        /// Items required (the capacity).
        need: usize,
    },

    /// Configuration edit attempted on a finalized card.
    #[display("Card is finalized and can no longer be edited")]
    AlreadyFinalized,

    /// Item text is blank.
    #[display("Item content must not be empty")]
    EmptyContent,

    /// Grid size change attempted while items are placed.
    #[display("Remove all items before changing the grid size")]
    CardNotEmpty,

    /// A postcondition failed after an operation.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for CardError {}
