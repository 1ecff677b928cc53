//! Calculator configuration.

use crate::builder::error::BuildError;
use crate::core::{DEFAULT_FRACTION_DIGITS, DEFAULT_HISTORY_CAPACITY, MAX_FRACTION_DIGITS};
use crate::persistence::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Tunable settings for a calculator session.
///
/// Missing fields take their defaults when deserializing, so a partial
/// JSON object is a valid configuration.
///
/// # Example
///
/// ```rust
/// use tally::builder::CalculatorConfig;
///
/// let config: CalculatorConfig = serde_json::from_str(r#"{"history_capacity": 10}"#).unwrap();
/// assert_eq!(config.history_capacity, 10);
/// assert_eq!(config.storage_key, "calculator-history");
/// assert_eq!(config.max_fraction_digits, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Key the history is persisted under
    pub storage_key: String,

    /// Maximum number of history items kept
    pub history_capacity: usize,

    /// Fractional digits shown for non-integer results
    pub max_fraction_digits: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl CalculatorConfig {
    /// Check every setting is usable.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.storage_key.is_empty() {
            return Err(BuildError::EmptyStorageKey);
        }

        if self.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }

        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(BuildError::FractionDigitsOutOfRange {
                requested: self.max_fraction_digits,
                max: MAX_FRACTION_DIGITS,
            });
        }

        Ok(())
    }
}
