//! Bingo line detection.

use crate::{CardConfiguration, GridSize, Item, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction of a line on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineKind {
    /// Horizontal line; index is the row.
    Row,
    /// Vertical line; index is the column.
    Column,
    /// Diagonal; index 0 runs top-left to bottom-right, 1 top-right to bottom-left.
    Diagonal,
}

/// A line of cells that can complete a bingo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BingoLine {
    /// Direction of the line.
    pub kind: LineKind,
    /// Row, column or diagonal number.
    pub index: usize,
}

impl BingoLine {
    /// Creates a line.
    pub fn new(kind: LineKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Cells on this line for a grid of the given size.
    pub fn positions(self, size: GridSize) -> Vec<Position> {
        let n = size.side();
        (0..n)
            .map(|i| match self.kind {
                LineKind::Row => size.position_at(self.index, i),
                LineKind::Column => size.position_at(i, self.index),
                LineKind::Diagonal if self.index == 0 => size.position_at(i, i),
                LineKind::Diagonal => size.position_at(i, n - 1 - i),
            })
            .collect()
    }
}

impl std::fmt::Display for BingoLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.index)
    }
}

/// Every line on a grid: rows, then columns, then the two diagonals.
pub fn all_lines(size: GridSize) -> Vec<BingoLine> {
    let n = size.side();
    (0..n)
        .map(|i| BingoLine::new(LineKind::Row, i))
        .chain((0..n).map(|i| BingoLine::new(LineKind::Column, i)))
        .chain((0..2).map(|i| BingoLine::new(LineKind::Diagonal, i)))
        .collect()
}

/// Returns every fully completed line.
///
/// A cell counts as complete if it is the FREE cell or holds a completed
/// item. Items off the grid are ignored.
#[instrument(skip(items), fields(items = items.len()))]
pub fn detect_bingos(config: &CardConfiguration, items: &[Item]) -> Vec<BingoLine> {
    let size = config.grid_size();
    let mut complete = vec![false; size.total_squares()];
    if let Some(free) = config.free_space_position() {
        complete[free.index()] = true;
    }
    for item in items.iter().filter(|i| i.is_completed()) {
        if let Some(cell) = complete.get_mut(item.position().index()) {
            *cell = true;
        }
    }

    all_lines(size)
        .into_iter()
        .filter(|line| line.positions(size).iter().all(|p| complete[p.index()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardPhase, FreeSpace};

    fn five_by_five() -> CardConfiguration {
        CardConfiguration::from_parts(
            GridSize::Five,
            "BINGO",
            FreeSpace::Enabled(Position::new(12)),
            CardPhase::Finalized,
        )
        .unwrap()
    }

    fn completed(positions: &[usize]) -> Vec<Item> {
        positions
            .iter()
            .map(|&p| Item::new(Position::new(p), "Goal").completed(true))
            .collect()
    }

    #[test]
    fn test_line_count() {
        for size in GridSize::ALL {
            assert_eq!(all_lines(size).len(), 2 * size.side() + 2);
        }
    }

    #[test]
    fn test_no_bingo_empty_card() {
        assert!(detect_bingos(&five_by_five(), &[]).is_empty());
    }

    #[test]
    fn test_bingo_top_row() {
        let lines = detect_bingos(&five_by_five(), &completed(&[0, 1, 2, 3, 4]));
        assert_eq!(lines, vec![BingoLine::new(LineKind::Row, 0)]);
    }

    #[test]
    fn test_free_cell_counts_toward_lines() {
        let lines = detect_bingos(&five_by_five(), &completed(&[10, 11, 13, 14]));
        assert_eq!(lines, vec![BingoLine::new(LineKind::Row, 2)]);

        let lines = detect_bingos(&five_by_five(), &completed(&[0, 6, 18, 24]));
        assert_eq!(lines, vec![BingoLine::new(LineKind::Diagonal, 0)]);

        let lines = detect_bingos(&five_by_five(), &completed(&[4, 8, 16, 20]));
        assert_eq!(lines, vec![BingoLine::new(LineKind::Diagonal, 1)]);
    }

    #[test]
    fn test_uncompleted_items_do_not_count() {
        let mut items = completed(&[0, 1, 2, 3]);
        items.push(Item::new(Position::new(4), "Not yet"));
        assert!(detect_bingos(&five_by_five(), &items).is_empty());
    }

    #[test]
    fn test_all_lines_on_complete_card() {
        let config = CardConfiguration::from_parts(
            GridSize::Three,
            "BIN",
            FreeSpace::Disabled,
            CardPhase::Finalized,
        )
        .unwrap();
        let items = completed(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let lines = detect_bingos(&config, &items);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines, all_lines(GridSize::Three));
    }

    #[test]
    fn test_column_bingo() {
        let lines = detect_bingos(&five_by_five(), &completed(&[2, 7, 17, 22]));
        assert_eq!(lines, vec![BingoLine::new(LineKind::Column, 2)]);
    }
}
