//! Persistence for the calculation history.
//!
//! History is stored as one JSON array of
//! `{ "expression", "result", "timestamp" }` objects, newest first, under
//! a single key of a [`HistoryStore`]. The store is an injected
//! collaborator so sessions can be backed by a file, memory, or a test
//! double.

mod cache;
pub mod error;
mod file;
mod memory;

pub use cache::HistoryCache;
pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key the history blob is stored under by default.
pub const DEFAULT_STORAGE_KEY: &str = "calculator-history";

/// Key-value storage holding serialized history.
///
/// Implementations are synchronous and best-effort. A failed `set` must
/// leave any previously stored value intact.
pub trait HistoryStore {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
