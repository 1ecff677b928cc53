//! Builder for constructing calculator sessions.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::machine::Calculator;
use crate::persistence::HistoryStore;

/// Builder for configuring a [`Calculator`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use tally::builder::CalculatorBuilder;
/// use tally::persistence::MemoryStore;
///
/// let calc = CalculatorBuilder::new(MemoryStore::new())
///     .storage_key("scratchpad")
///     .history_capacity(10)
///     .max_fraction_digits(4)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.history().capacity(), 10);
/// assert_eq!(calc.history_cache().key(), "scratchpad");
/// ```
pub struct CalculatorBuilder<St: HistoryStore> {
    store: St,
    config: CalculatorConfig,
}

impl<St: HistoryStore> CalculatorBuilder<St> {
    /// Create a builder with default settings.
    pub fn new(store: St) -> Self {
        Self {
            store,
            config: CalculatorConfig::default(),
        }
    }

    /// Replace all settings at once.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the key history is persisted under.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// Set how many history items are kept.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set how many fractional digits results are rounded to.
    pub fn max_fraction_digits(mut self, digits: usize) -> Self {
        self.config.max_fraction_digits = digits;
        self
    }

    /// Build the calculator, restoring any persisted history.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Calculator<St>, BuildError> {
        self.config.validate()?;
        Ok(Calculator::from_config(self.store, self.config))
    }
}
