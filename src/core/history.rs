//! Calculation history tracking.
//!
//! Provides an immutable, capped, newest-first list of completed
//! calculations, following functional programming principles.

use super::evaluate::parse_operand;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of calculations kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Record of one successful evaluation.
///
/// The `timestamp` (Unix milliseconds) doubles as the item's identifier.
///
/// # Example
///
/// ```rust
/// use tally::core::HistoryItem;
///
/// let item = HistoryItem::new("7 + 3 =", "10", 1_700_000_000_000);
/// assert_eq!(item.result, "10");
/// assert!(item.created_at().is_some());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Full textual equation
    pub expression: String,
    /// Formatted result
    pub result: String,
    /// Creation time in Unix milliseconds
    pub timestamp: i64,
}

impl HistoryItem {
    pub fn new(expression: impl Into<String>, result: impl Into<String>, timestamp: i64) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp,
        }
    }

    /// Creation time as a UTC datetime, if the timestamp is in range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Check the item could have been produced by an evaluation: the
    /// result is a finite number and the timestamp is a valid datetime.
    pub fn is_well_formed(&self) -> bool {
        parse_operand(&self.result).is_some() && self.created_at().is_some()
    }
}

/// Ordered, capped history of calculations, newest first.
///
/// History is immutable - `record` returns a new history with the item
/// prepended and the oldest entries beyond capacity dropped.
///
/// # Example
///
/// ```rust
/// use tally::core::{History, HistoryItem};
///
/// let history = History::with_capacity(2);
/// let history = history.record(HistoryItem::new("1 + 1 =", "2", 1));
/// let history = history.record(HistoryItem::new("2 + 2 =", "4", 2));
/// let history = history.record(HistoryItem::new("3 + 3 =", "6", 3));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.items()[0].result, "6");
/// assert_eq!(history.items()[1].result, "4");
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct History {
    items: Vec<HistoryItem>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Build a history from stored items.
    ///
    /// Items are ordered newest first and only the first item for each
    /// timestamp is kept. Anything past `capacity` is dropped.
    pub fn from_items(mut items: Vec<HistoryItem>, capacity: usize) -> Self {
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items.dedup_by_key(|item| item.timestamp);
        items.truncate(capacity);
        Self { items, capacity }
    }

    /// Record an item, returning a new history.
    ///
    /// This is a pure function - the existing history is left untouched.
    pub fn record(&self, item: HistoryItem) -> Self {
        let mut items = Vec::with_capacity(self.capacity.min(self.items.len() + 1));
        items.push(item);
        items.extend(self.items.iter().cloned());
        items.truncate(self.capacity);
        Self {
            items,
            capacity: self.capacity,
        }
    }

    /// Timestamp to use for a new item created at `now_millis`.
    ///
    /// The result is strictly greater than the newest recorded timestamp,
    /// so identifiers stay unique even within one millisecond. It stops
    /// at `i64::MAX` rather than overflowing.
    pub fn next_timestamp(&self, now_millis: i64) -> i64 {
        match self.newest() {
            Some(newest) if now_millis <= newest.timestamp => newest.timestamp.saturating_add(1),
            _ => now_millis,
        }
    }

    pub fn newest(&self) -> Option<&HistoryItem> {
        self.items.first()
    }

    /// Look up an item by its timestamp.
    pub fn find(&self, timestamp: i64) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.timestamp == timestamp)
    }

    /// All items, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
