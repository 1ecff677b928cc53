//! In-memory store, used for tests and ephemeral sessions.

use super::{HistoryStore, StorageError};
use std::collections::HashMap;

/// `HistoryStore` backed by a `HashMap`.
///
/// # Example
///
/// ```rust
/// use tally::persistence::{HistoryStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("history", "[]").unwrap();
/// assert_eq!(store.get("history").unwrap().as_deref(), Some("[]"));
/// store.remove("history").unwrap();
/// assert!(store.get("history").unwrap().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Borrow the raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl HistoryStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let store = MemoryStore::new();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut store = MemoryStore::with_entry("k", "old");
        store.set("k", "new").unwrap();
        assert_eq!(store.raw("k"), Some("new"));
    }

    #[test]
    fn removing_absent_key_succeeds() {
        let mut store = MemoryStore::new();
        assert!(store.remove("absent").is_ok());
    }
}
