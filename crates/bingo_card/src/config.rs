//! Validated card configuration.
//!
//! `CardConfiguration` is only ever built through [`CardConfiguration::create`]
//! or [`CardConfiguration::from_parts`], so a configuration in hand always
//! satisfies the structural rules: the header fits the grid, the FREE cell
//! (if any) lies on the grid, and FREE on/off and FREE position cannot
//! disagree because they are one field.

use crate::placement::free_target;
use crate::{Board, CardError, CardPhase, GridSize, Position, geometry};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// State of the FREE cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreeSpace {
    /// No FREE cell; every square can hold an item.
    Disabled,
    /// FREE cell at the given position.
    Enabled(Position),
}

impl FreeSpace {
    /// Returns the FREE position, if enabled.
    pub fn position(self) -> Option<Position> {
        match self {
            FreeSpace::Disabled => None,
            FreeSpace::Enabled(pos) => Some(pos),
        }
    }
}

/// Grid size, header, FREE cell and lifecycle phase of one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct CardConfiguration {
    grid_size: GridSize,
    header_text: String,
    free_space: FreeSpace,
    phase: CardPhase,
}

/// Unvalidated shape of a persisted configuration.
#[derive(Deserialize)]
struct RawConfiguration {
    grid_size: GridSize,
    header_text: String,
    free_space: FreeSpace,
    #[serde(default)]
    phase: CardPhase,
}

impl TryFrom<RawConfiguration> for CardConfiguration {
    type Error = CardError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        Self::from_parts(raw.grid_size, &raw.header_text, raw.free_space, raw.phase)
    }
}

impl CardConfiguration {
    /// Creates a draft configuration.
    ///
    /// The header defaults to "BINGO" truncated to the grid width and FREE
    /// defaults to enabled. The FREE cell goes in the center on odd grids and
    /// on a random cell on even grids.
    #[instrument(skip(rng))]
    pub fn create<R: Rng + ?Sized>(
        grid_size: GridSize,
        header_text: Option<&str>,
        has_free_space: Option<bool>,
        rng: &mut R,
    ) -> Result<Self, CardError> {
        let header_text = geometry::validate_header_text(
            header_text.unwrap_or_else(|| grid_size.default_header_text()),
            grid_size,
        )?;

        let free_space = if has_free_space.unwrap_or(true) {
            let board = Board::empty(grid_size);
            FreeSpace::Enabled(free_target(grid_size, &board, rng)?)
        } else {
            FreeSpace::Disabled
        };

        debug!(%grid_size, %header_text, ?free_space, "Created card configuration");
        Ok(Self {
            grid_size,
            header_text,
            free_space,
            phase: CardPhase::Draft,
        })
    }

    /// Rebuilds a configuration from stored parts, re-checking every rule.
    #[instrument]
    pub fn from_parts(
        grid_size: GridSize,
        header_text: &str,
        free_space: FreeSpace,
        phase: CardPhase,
    ) -> Result<Self, CardError> {
        let header_text = geometry::validate_header_text(header_text, grid_size)?;
        if let FreeSpace::Enabled(pos) = free_space {
            grid_size.check_position(pos)?;
        }
        Ok(Self {
            grid_size,
            header_text,
            free_space,
            phase,
        })
    }

    /// Returns the grid size.
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// Returns the uppercase header text.
    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    /// Returns the FREE cell state.
    pub fn free_space(&self) -> FreeSpace {
        self.free_space
    }

    /// Returns true if the card has a FREE cell.
    pub fn has_free_space(&self) -> bool {
        matches!(self.free_space, FreeSpace::Enabled(_))
    }

    /// Returns the FREE cell position, if enabled.
    pub fn free_space_position(&self) -> Option<Position> {
        self.free_space.position()
    }

    /// Returns true if `position` is the FREE cell.
    pub fn is_free(&self, position: Position) -> bool {
        self.free_space_position() == Some(position)
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Returns true once the card has been finalized.
    pub fn is_finalized(&self) -> bool {
        self.phase.is_finalized()
    }

    /// Maximum number of items the card can hold.
    pub fn capacity(&self) -> usize {
        self.grid_size.capacity(self.has_free_space())
    }

    /// Fails with [`CardError::AlreadyFinalized`] unless the card is a draft.
    pub fn ensure_draft(&self) -> Result<(), CardError> {
        if self.is_finalized() {
            Err(CardError::AlreadyFinalized)
        } else {
            Ok(())
        }
    }

    pub(crate) fn with_free_space(mut self, free_space: FreeSpace) -> Self {
        self.free_space = free_space;
        self
    }

    pub(crate) fn with_header_text(mut self, header_text: String) -> Self {
        self.header_text = header_text;
        self
    }

    pub(crate) fn with_phase(mut self, phase: CardPhase) -> Self {
        self.phase = phase;
        self
    }
}
