//! Tally: a four-function calculator state machine with a persisted history
//!
//! Tally follows the "pure core, imperative shell" philosophy. The core
//! evaluates single binary operations and tracks history as immutable
//! values; the shell applies keypad events, reads the clock, and flushes
//! history to an injected key-value store.
//!
//! # Core Concepts
//!
//! - **Input state machine**: [`Calculator`] consumes digit, operator,
//!   and control events and maintains the display and running expression
//! - **History cache**: a capped, newest-first list of past calculations,
//!   persisted as a JSON array under one storage key
//! - **Storage**: anything implementing [`HistoryStore`]
//!
//! # Example
//!
//! ```rust
//! use tally::{Action, Calculator, MemoryStore};
//!
//! let mut calc = Calculator::new(MemoryStore::new());
//! for label in ["2", ".", "5", "×", "4", "="] {
//!     calc.dispatch(label.parse::<Action>().unwrap());
//! }
//!
//! assert_eq!(calc.display(), "10");
//! assert_eq!(calc.expression(), "2.5 × 4 =");
//! assert_eq!(calc.history().len(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod persistence;

// Re-export commonly used types
pub use crate::builder::{BuildError, CalculatorBuilder, CalculatorConfig};
pub use crate::core::{CalculatorState, History, HistoryItem, Operator, Phase};
pub use crate::machine::{Action, Calculator};
pub use crate::persistence::{FileStore, HistoryCache, HistoryStore, MemoryStore, StorageError};
