use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single consumption event: `quantity` attributed to `actor` at `timestamp`.
///
/// Event slices are expected in chronological order; equal timestamps keep
/// their source order. Nothing in this crate re-sorts events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Name of the entity the quantity is attributed to.
    pub actor: String,
    /// Non-negative amount consumed.
    pub quantity: u64,
    /// When the consumption happened (naive local time).
    pub timestamp: NaiveDateTime,
}

impl Event {
    /// Build an event.
    pub fn new(actor: impl Into<String>, quantity: u64, timestamp: NaiveDateTime) -> Self {
        Self {
            actor: actor.into(),
            quantity,
            timestamp,
        }
    }
}
