//! Imperative shell around the pure core.
//!
//! [`Calculator`] owns the input state and the history cache, applies
//! input events, reads the clock, and writes to storage. [`Action`]
//! adapts discrete UI events onto its operations.

mod action;
mod calculator;

pub use action::{Action, ParseActionError};
pub use calculator::Calculator;
