//! JSON card snapshots on disk.

use bingo_card::Card;
use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Reads and writes one card snapshot at a fixed path.
#[derive(Debug, Clone)]
pub struct CardStore {
    path: PathBuf,
}

impl CardStore {
    /// Creates a store for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if a snapshot exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the card. Configuration rules are re-checked while parsing.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Card, StoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            StoreError::new(format!("Failed to read card {}: {}", self.path.display(), e))
        })?;
        let card: Card = serde_json::from_str(&content).map_err(|e| {
            StoreError::new(format!("Failed to parse card {}: {}", self.path.display(), e))
        })?;
        debug!(items = card.items.len(), "Card loaded");
        Ok(card)
    }

    /// Saves the card as pretty-printed JSON, replacing any previous snapshot.
    #[instrument(skip(self, card), fields(path = %self.path.display()))]
    pub fn save(&self, card: &Card) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(card)
            .map_err(|e| StoreError::new(format!("Failed to encode card: {}", e)))?;
        std::fs::write(&self.path, content).map_err(|e| {
            StoreError::new(format!("Failed to write card {}: {}", self.path.display(), e))
        })?;
        debug!(items = card.items.len(), "Card saved");
        Ok(())
    }
}

/// Card storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
