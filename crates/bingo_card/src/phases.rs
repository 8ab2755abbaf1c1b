//! Card lifecycle phase.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a card.
///
/// A card starts as a `Draft` and moves to `Finalized` exactly once.
/// There is no transition back.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CardPhase {
    /// Layout and configuration may still change.
    #[default]
    Draft,
    /// Configuration is frozen; only completion flags change.
    Finalized,
}

impl CardPhase {
    /// Returns true for the finalized phase.
    pub fn is_finalized(self) -> bool {
        matches!(self, CardPhase::Finalized)
    }
}
