//! Grid geometry: sizes, positions and header defaults.
//!
//! Everything here is pure math over the grid size. Positions are
//! row-major indices, so on a 5x5 grid position 12 is the center.

use crate::{CardConfiguration, CardError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Full header word; shorter grids use a prefix of it.
const DEFAULT_HEADER: &str = "BINGO";

/// A cell index on the grid, counted row-major from the top-left.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Position(usize);

impl Position {
    /// Creates a position from a raw index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw row-major index.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Supported side lengths of a square card.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    /// 2x2 grid.
    #[strum(to_string = "2x2")]
    Two,
    /// 3x3 grid.
    #[strum(to_string = "3x3")]
    Three,
    /// 4x4 grid.
    #[strum(to_string = "4x4")]
    Four,
    /// 5x5 grid.
    #[strum(to_string = "5x5")]
    Five,
}

impl GridSize {
    /// All supported sizes, smallest first.
    pub const ALL: [GridSize; 4] = [GridSize::Two, GridSize::Three, GridSize::Four, GridSize::Five];

    /// Number of cells along one edge.
    pub const fn side(self) -> usize {
        match self {
            GridSize::Two => 2,
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
        }
    }

    /// Number of cells on the grid (`n²`).
    pub const fn total_squares(self) -> usize {
        self.side() * self.side()
    }

    /// Maximum number of items: every cell, minus one if FREE is enabled.
    pub const fn capacity(self, has_free_space: bool) -> usize {
        if has_free_space {
            self.total_squares() - 1
        } else {
            self.total_squares()
        }
    }

    /// "BINGO" truncated to the grid width.
    pub fn default_header_text(self) -> &'static str {
        &DEFAULT_HEADER[..self.side()]
    }

    /// Center cell, which only exists on odd-sized grids.
    pub const fn center_position(self) -> Option<Position> {
        match self {
            GridSize::Three | GridSize::Five => Some(Position(self.total_squares() / 2)),
            GridSize::Two | GridSize::Four => None,
        }
    }

    /// Returns true if the position lies on this grid.
    pub const fn contains(self, position: Position) -> bool {
        position.0 < self.total_squares()
    }

    /// Fails with [`CardError::PositionOutOfRange`] unless the position lies on this grid.
    pub fn check_position(self, position: Position) -> Result<(), CardError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(CardError::PositionOutOfRange {
                position,
                total: self.total_squares(),
            })
        }
    }

    /// Iterates over every position in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.total_squares()).map(Position)
    }

    /// Row of a position (0 is the top row).
    pub const fn row_of(self, position: Position) -> usize {
        position.0 / self.side()
    }

    /// Column of a position (0 is the leftmost column).
    pub const fn col_of(self, position: Position) -> usize {
        position.0 % self.side()
    }

    /// Position at the given row and column.
    pub const fn position_at(self, row: usize, col: usize) -> Position {
        Position(row * self.side() + col)
    }
}

impl TryFrom<u8> for GridSize {
    type Error = CardError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            2 => Ok(GridSize::Two),
            3 => Ok(GridSize::Three),
            4 => Ok(GridSize::Four),
            5 => Ok(GridSize::Five),
            other => Err(CardError::InvalidGridSize(other)),
        }
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.side() as u8
    }
}

/// Returns true iff `n` is a supported grid size.
pub fn is_valid_grid_size(n: u8) -> bool {
    GridSize::try_from(n).is_ok()
}

/// Validates header text for a grid and returns it normalized to uppercase.
///
/// Surrounding whitespace is trimmed; the remaining length, in characters,
/// must be between 1 and the grid width.
#[instrument]
pub fn validate_header_text(text: &str, size: GridSize) -> Result<String, CardError> {
    let normalized = text.trim().to_uppercase();
    let len = normalized.chars().count();
    if (1..=size.side()).contains(&len) {
        Ok(normalized)
    } else {
        Err(CardError::InvalidHeaderLength {
            len,
            max: size.side(),
        })
    }
}

/// Picks the header for a card moving from one grid size to another.
///
/// A default header becomes the new size's default. A custom header is
/// kept when it fits and replaced by the default otherwise.
pub(crate) fn resized_header_text(header: &str, from: GridSize, to: GridSize) -> String {
    if header == from.default_header_text() {
        return to.default_header_text().to_string();
    }
    validate_header_text(header, to).unwrap_or_else(|_| to.default_header_text().to_string())
}

/// Returns true if an item may sit at `position` under `config`.
pub fn is_valid_item_position(position: Position, config: &CardConfiguration) -> bool {
    config.grid_size().contains(position) && config.free_space_position() != Some(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardPhase, FreeSpace};

    #[test]
    fn test_valid_grid_sizes() {
        assert!(!is_valid_grid_size(0));
        assert!(!is_valid_grid_size(1));
        assert!(is_valid_grid_size(2));
        assert!(is_valid_grid_size(5));
        assert!(!is_valid_grid_size(6));
        assert_eq!(GridSize::try_from(7), Err(CardError::InvalidGridSize(7)));
    }

    #[test]
    fn test_capacity_formula() {
        for size in GridSize::ALL {
            let n = size.side();
            assert_eq!(size.total_squares(), n * n);
            assert_eq!(size.capacity(true), n * n - 1);
            assert_eq!(size.capacity(false), n * n);
        }
    }

    #[test]
    fn test_default_headers() {
        assert_eq!(GridSize::Two.default_header_text(), "BI");
        assert_eq!(GridSize::Three.default_header_text(), "BIN");
        assert_eq!(GridSize::Four.default_header_text(), "BING");
        assert_eq!(GridSize::Five.default_header_text(), "BINGO");
    }

    #[test]
    fn test_center_position() {
        assert_eq!(GridSize::Three.center_position(), Some(Position::new(4)));
        assert_eq!(GridSize::Five.center_position(), Some(Position::new(12)));
        assert_eq!(GridSize::Two.center_position(), None);
        assert_eq!(GridSize::Four.center_position(), None);
    }

    #[test]
    fn test_header_validation() {
        assert_eq!(validate_header_text("goal", GridSize::Four), Ok("GOAL".to_string()));
        assert_eq!(validate_header_text(" ab ", GridSize::Two), Ok("AB".to_string()));
        assert_eq!(
            validate_header_text("", GridSize::Three),
            Err(CardError::InvalidHeaderLength { len: 0, max: 3 })
        );
        assert_eq!(
            validate_header_text("BINGO", GridSize::Three),
            Err(CardError::InvalidHeaderLength { len: 5, max: 3 })
        );
    }

    #[test]
    fn test_resized_header_text() {
        assert_eq!(resized_header_text("BIN", GridSize::Three, GridSize::Five), "BINGO");
        assert_eq!(resized_header_text("BINGO", GridSize::Five, GridSize::Two), "BI");
        assert_eq!(resized_header_text("YAY", GridSize::Three, GridSize::Five), "YAY");
        assert_eq!(resized_header_text("GOALS", GridSize::Five, GridSize::Three), "BIN");
    }

    #[test]
    fn test_is_valid_item_position() {
        let with_free = CardConfiguration::from_parts(
            GridSize::Three,
            "BIN",
            FreeSpace::Enabled(Position::new(4)),
            CardPhase::Draft,
        )
        .unwrap();
        assert!(is_valid_item_position(Position::new(0), &with_free));
        assert!(is_valid_item_position(Position::new(8), &with_free));
        assert!(!is_valid_item_position(Position::new(4), &with_free));
        assert!(!is_valid_item_position(Position::new(9), &with_free));
        assert!(!is_valid_item_position(Position::new(25), &with_free));

        let without_free = CardConfiguration::from_parts(
            GridSize::Three,
            "BIN",
            FreeSpace::Disabled,
            CardPhase::Draft,
        )
        .unwrap();
        assert!(is_valid_item_position(Position::new(4), &without_free));
    }

    #[test]
    fn test_row_and_column_math() {
        let size = GridSize::Five;
        let pos = Position::new(13);
        assert_eq!(size.row_of(pos), 2);
        assert_eq!(size.col_of(pos), 3);
        assert_eq!(size.position_at(2, 3), pos);
        assert_eq!(size.positions().count(), 25);
    }

    #[test]
    fn test_grid_size_serde_uses_side_length() {
        let json = serde_json::to_string(&GridSize::Four).unwrap();
        assert_eq!(json, "4");
        let parsed: Result<GridSize, _> = serde_json::from_str("9");
        assert!(parsed.is_err());
    }
}
