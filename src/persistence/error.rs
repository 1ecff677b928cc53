//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted history
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying read, write, or delete failed
    #[error("Storage I/O failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// History could not be encoded as JSON
    #[error("Encoding history failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Key cannot be used by this store
    #[error("Invalid storage key {0:?}")]
    InvalidKey(String),
}
