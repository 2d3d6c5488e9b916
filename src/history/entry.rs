//! History entry representing one completed calculation.

use serde::Serialize;

/// A completed calculation. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    id: u64,
    calculation: String,
    result: String,
    timestamp: String,
}

impl HistoryEntry {
    pub fn new(
        id: u64,
        calculation: impl Into<String>,
        result: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            calculation: calculation.into(),
            result: result.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Unique key, increasing in creation order.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The operation performed, e.g. `5 + 3` or `√(16)`.
    pub fn calculation(&self) -> &str {
        &self.calculation
    }

    /// The result as it was shown on the display.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Time of day the entry was recorded.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
