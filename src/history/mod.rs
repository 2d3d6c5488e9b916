//! Bounded calculation history, newest entry first.

mod entry;

pub use entry::HistoryEntry;

use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::collections::VecDeque;
use tracing::warn;

/// Default number of entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Default strftime format for entry timestamps.
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Ordered log of completed calculations.
///
/// Index 0 is always the most recent entry. Recording beyond the limit
/// drops the oldest entry.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
    next_id: u64,
    time_format: String,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create an empty history holding at most `limit` entries (at least 1).
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            next_id: 1,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Use a custom strftime format for new entries.
    ///
    /// An invalid format is replaced by [`DEFAULT_TIME_FORMAT`].
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        if is_valid_time_format(&format) {
            self.time_format = format;
        } else {
            warn!(time_format = %format, "invalid time format, using {}", DEFAULT_TIME_FORMAT);
            self.time_format = DEFAULT_TIME_FORMAT.to_string();
        }
        self
    }

    /// The strftime format used for new entries.
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Record a calculation stamped with the current local time.
    pub fn record(&mut self, calculation: String, result: String) -> &HistoryEntry {
        let timestamp = Local::now().format(&self.time_format).to_string();
        let id = self.next_id;
        self.next_id += 1;
        self.push(HistoryEntry::new(id, calculation, result, timestamp))
    }

    /// Prepend an entry, evicting the oldest entries beyond the limit.
    pub fn push(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.next_id = self.next_id.max(entry.id() + 1);
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
        &self.entries[0]
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry at `index`, 0 being the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Whether `format` is a strftime format chrono can render.
pub fn is_valid_time_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
