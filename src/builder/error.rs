//! Build errors for calculator configuration.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Storage key is empty. Call .storage_key(key) with a non-empty key")]
    EmptyStorageKey,

    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Fraction digits ({requested}) exceed the supported maximum ({max})")]
    FractionDigitsOutOfRange { requested: usize, max: usize },
}
