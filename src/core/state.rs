//! Calculator input state.
//!
//! `CalculatorState` is a plain value: the machine in [`crate::machine`]
//! owns one and rewrites its fields in response to input events.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Display sentinel shown after an arithmetic fault.
pub const ERROR_SENTINEL: &str = "ERROR";

/// Transient state of one calculator session.
///
/// `display` always holds a numeric literal, the literal `"0"`, or the
/// [`ERROR_SENTINEL`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Current operand as typed, or the most recent result
    pub display: String,

    /// Human-readable running expression, e.g. `"7 + 3 ="`
    pub expression: String,

    /// Left operand of the pending operation
    pub previous_value: Option<String>,

    /// Operator awaiting its right operand
    pub operation: Option<Operator>,

    /// Next digit starts a fresh operand instead of appending
    pub is_new_number: bool,

    /// Last evaluation failed
    pub error: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            expression: String::new(),
            previous_value: None,
            operation: None,
            is_new_number: true,
            error: false,
        }
    }
}

impl CalculatorState {
    /// Derive the entry phase from the stored fields.
    pub fn phase(&self) -> Phase {
        if self.error {
            Phase::Error
        } else if self.previous_value.is_some() && self.operation.is_some() {
            Phase::EnteringSecondOperand
        } else {
            Phase::EnteringFirstOperand
        }
    }

    /// Check whether the display currently shows the error sentinel.
    pub fn shows_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }
}

/// Coarse position of the input state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    EnteringFirstOperand,
    EnteringSecondOperand,
    Error,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnteringFirstOperand => "EnteringFirstOperand",
            Self::EnteringSecondOperand => "EnteringSecondOperand",
            Self::Error => "Error",
        }
    }

    /// Check if this is the error phase.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}
