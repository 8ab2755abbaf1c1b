//! Goal items placed on the card.

use crate::{CardError, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A goal occupying one cell of the card.
///
/// Deserialization rejects blank content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    position: Position,
    content: String,
    is_completed: bool,
}

#[derive(Deserialize)]
struct RawItem {
    position: Position,
    content: String,
    #[serde(default)]
    is_completed: bool,
}

impl TryFrom<RawItem> for Item {
    type Error = CardError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        if raw.content.trim().is_empty() {
            return Err(CardError::EmptyContent);
        }
        Ok(Self::new(raw.position, raw.content).completed(raw.is_completed))
    }
}

impl Item {
    /// Creates an uncompleted item.
    pub fn new(position: Position, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
            is_completed: false,
        }
    }

    /// Returns this item with the given completion flag.
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Returns the cell this item occupies.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the goal text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true if the goal has been achieved.
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub(crate) fn moved_to(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// An item that was moved out of the way to make room for the FREE cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Displacement {
    /// Goal text of the moved item.
    content: String,
    /// Cell the item left (now the FREE cell).
    from: Position,
    /// Cell the item landed on.
    to: Position,
}

impl std::fmt::Display for Displacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" moved {} -> {}", self.content, self.from, self.to)
    }
}
