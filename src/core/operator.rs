//! Binary operators understood by the calculator.
//!
//! Operators render as the glyphs shown on the keypad (`+ − × ÷ %`) and
//! parse from those glyphs as well as their common ASCII spellings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pending binary operation.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
///
/// let op: Operator = "*".parse().unwrap();
/// assert_eq!(op, Operator::Multiply);
/// assert_eq!(op.symbol(), "×");
/// assert_eq!(op.apply(6.0, 7.0), 42.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "−")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
    #[serde(rename = "%")]
    Remainder,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 5] = [
        Operator::Remainder,
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// The glyph used in displayed expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Remainder => "%",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// This is raw IEEE-754 arithmetic: division by zero yields an
    /// infinity or NaN here. Callers that need the calculator's error
    /// semantics go through [`calculate`](crate::core::calculate).
    ///
    /// The remainder takes the sign of the dividend.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Remainder => lhs % rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when text does not name an operator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown operator: {0:?}")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "−" | "-" => Ok(Self::Subtract),
            "×" | "*" | "x" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "%" => Ok(Self::Remainder),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}
