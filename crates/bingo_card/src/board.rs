//! Cell-level view of a card.
//!
//! A `Board` lays a configuration and its items out on the grid so the
//! engines can ask which cells are empty, free or occupied. Building one
//! also checks that the items are structurally sound.

use crate::{CardConfiguration, CardError, GridSize, Item, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed here.
    Empty,
    /// The FREE cell.
    Free,
    /// Item at this index of the item slice the board was built from.
    Item(usize),
}

/// Grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn empty(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.total_squares()],
        }
    }

    /// Lays items out on the grid described by `config`.
    ///
    /// Fails if an item has blank text, lies off the grid, sits on the FREE
    /// cell or shares a cell with another item.
    #[instrument(skip(items), fields(items = items.len()))]
    pub fn from_card(config: &CardConfiguration, items: &[Item]) -> Result<Self, CardError> {
        let size = config.grid_size();
        let mut board = Self::empty(size);
        if let Some(free) = config.free_space_position() {
            board.cells[free.index()] = Cell::Free;
        }
        for (idx, item) in items.iter().enumerate() {
            if item.content().trim().is_empty() {
                return Err(CardError::EmptyContent);
            }
            let pos = item.position();
            size.check_position(pos)?;
            if board.cells[pos.index()] != Cell::Empty {
                return Err(CardError::PositionOccupied(pos));
            }
            board.cells[pos.index()] = Cell::Item(idx);
        }
        Ok(board)
    }

    /// Gets the cell at a position, if it lies on the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.index()).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.size.positions().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Formats the board as text, header letters above their columns.
    ///
    /// Items show as `[x]` or `[ ]` followed by their text, cut to
    /// `cell_width` characters.
    pub fn display(&self, config: &CardConfiguration, items: &[Item], cell_width: usize) -> String {
        let width = cell_width.max(4);
        let side = self.size.side();
        let separator = format!("+{}\n", format!("{}+", "-".repeat(width + 2)).repeat(side));
        let mut result = String::new();

        let mut letters = config.header_text().chars();
        result.push('|');
        for _ in 0..side {
            let letter = letters.next().map(String::from).unwrap_or_default();
            result.push_str(&format!(" {:^width$} |", letter));
        }
        result.push('\n');
        result.push_str(&separator);

        for row in 0..side {
            result.push('|');
            for col in 0..side {
                let text = match self.cells[self.size.position_at(row, col).index()] {
                    Cell::Empty => String::new(),
                    Cell::Free => "FREE".to_string(),
                    Cell::Item(idx) => {
                        let item = &items[idx];
                        let mark = if item.is_completed() { "[x]" } else { "[ ]" };
                        format!("{} {}", mark, item.content())
                    }
                };
                let clipped: String = text.chars().take(width).collect();
                result.push_str(&format!(" {:<width$} |", clipped));
            }
            result.push('\n');
            result.push_str(&separator);
        }
        result
    }
}
