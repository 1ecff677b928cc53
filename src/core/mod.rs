//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Operators and single-step evaluation
//! - The input state value
//! - Immutable, capped history tracking
//!
//! All logic in this module is pure (no clock, no storage), following
//! the "pure core, imperative shell" philosophy.

mod evaluate;
mod history;
mod operator;
mod state;

pub use evaluate::{
    calculate, calculate_with_precision, format_number, ArithmeticError,
    DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS,
};
pub use history::{History, HistoryItem, DEFAULT_HISTORY_CAPACITY};
pub use operator::{Operator, ParseOperatorError};
pub use state::{CalculatorState, Phase, ERROR_SENTINEL};
