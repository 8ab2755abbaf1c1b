//! First-class invariants for bingo cards.
//!
//! Invariants are logical properties every card snapshot must satisfy.
//! They are testable independently, and every editing operation checks
//! them as a postcondition in debug builds.

use crate::{CardError, CardView};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// Implement InvariantSet for 5-tuples
impl<S, I1, I2, I3, I4, I5> InvariantSet<S> for (I1, I2, I3, I4, I5)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
    I5: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        check_one::<S, I4>(state, &mut violations);
        check_one::<S, I5>(state, &mut violations);
        into_result(violations)
    }
}

pub mod capacity;
pub mod content;
pub mod free_cell;
pub mod positions;

pub use capacity::WithinCapacityInvariant;
pub use content::ContentNonEmptyInvariant;
pub use free_cell::FreeCellVacantInvariant;
pub use positions::{PositionsInRangeInvariant, PositionsUniqueInvariant};

/// All card invariants as a composable set.
pub type CardInvariants = (
    PositionsInRangeInvariant,
    PositionsUniqueInvariant,
    FreeCellVacantInvariant,
    WithinCapacityInvariant,
    ContentNonEmptyInvariant,
);

/// Checks every card invariant, folding violations into one error.
#[instrument(skip(card), fields(items = card.items.len()))]
pub fn verify(card: &CardView<'_>) -> Result<(), CardError> {
    CardInvariants::check_all(card).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Card invariants violated");
        CardError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}
