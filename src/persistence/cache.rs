//! History cache: the in-memory history plus its persisted copy.

use super::{HistoryStore, StorageError};
use crate::core::{History, HistoryItem};
use tracing::{debug, warn};

/// Capped history that flushes to a [`HistoryStore`] on every mutation.
///
/// The in-memory list is authoritative for the session. When a write
/// fails the mutation is kept in memory and the error is returned.
///
/// # Example
///
/// ```rust
/// use tally::core::HistoryItem;
/// use tally::persistence::{HistoryCache, MemoryStore};
///
/// let mut cache = HistoryCache::restore(MemoryStore::new(), "calculator-history", 50);
/// cache.append(HistoryItem::new("7 + 3 =", "10", 1)).unwrap();
///
/// let restored = HistoryCache::restore(cache.into_store(), "calculator-history", 50);
/// assert_eq!(restored.items()[0].result, "10");
/// ```
#[derive(Debug)]
pub struct HistoryCache<St: HistoryStore> {
    store: St,
    key: String,
    history: History,
}

impl<St: HistoryStore> HistoryCache<St> {
    /// Load the persisted history under `key`.
    ///
    /// A missing entry, unreadable storage, or malformed JSON all yield
    /// an empty history. Items with a non-numeric result or an
    /// out-of-range timestamp are dropped. The rest are ordered newest
    /// first and truncated to `capacity`.
    pub fn restore(store: St, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let history = match store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryItem>>(&raw) {
                Ok(mut items) => {
                    let stored = items.len();
                    items.retain(HistoryItem::is_well_formed);
                    if items.len() < stored {
                        warn!(
                            key = %key,
                            dropped = stored - items.len(),
                            "discarding malformed history items"
                        );
                    }
                    let history = History::from_items(items, capacity);
                    debug!(key = %key, items = history.len(), "restored history");
                    history
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "discarding malformed persisted history");
                    History::with_capacity(capacity)
                }
            },
            Ok(None) => {
                debug!(key = %key, "no persisted history");
                History::with_capacity(capacity)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "failed to read persisted history");
                History::with_capacity(capacity)
            }
        };

        Self {
            store,
            key,
            history,
        }
    }

    /// Prepend `item`, drop entries beyond capacity, and persist the list.
    pub fn append(&mut self, item: HistoryItem) -> Result<(), StorageError> {
        self.history = self.history.record(item);
        debug!(key = %self.key, items = self.history.len(), "appended history item");
        self.persist()
    }

    /// Empty the history and delete the persisted entry.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.history = History::with_capacity(self.history.capacity());
        debug!(key = %self.key, "cleared history");
        self.store.remove(&self.key)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(self.history.items())?;
        self.store.set(&self.key, &encoded)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// All items, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        self.history.items()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn into_store(self) -> St {
        self.store
    }
}
