//! Builder API for calculator configuration.
//!
//! [`CalculatorBuilder`] collects a [`CalculatorConfig`], validates it,
//! and restores the session's history from the supplied store.

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use config::CalculatorConfig;
pub use error::BuildError;
