//! Pure evaluation of a single binary operation.
//!
//! Operands arrive as display strings and the result leaves as a display
//! string, so the state machine never handles raw floats.

use super::operator::Operator;
use thiserror::Error;
use tracing::debug;

/// Fractional digits kept when rendering a non-integer result.
pub const DEFAULT_FRACTION_DIGITS: usize = 8;

/// Upper bound accepted for the fractional digit setting.
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Arithmetic faults that replace the display with the error sentinel.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result of {operator} is not a finite number")]
    NotFinite { operator: Operator },
}

/// Evaluate `prev op current` with the default precision.
///
/// # Example
///
/// ```rust
/// use tally::core::{calculate, ArithmeticError, Operator};
///
/// assert_eq!(calculate("7", "3", Operator::Add), Ok("10".to_string()));
/// assert_eq!(calculate("1", "3", Operator::Divide), Ok("0.33333333".to_string()));
/// assert_eq!(
///     calculate("5", "0", Operator::Divide),
///     Err(ArithmeticError::DivisionByZero)
/// );
/// ```
pub fn calculate(prev: &str, current: &str, op: Operator) -> Result<String, ArithmeticError> {
    calculate_with_precision(prev, current, op, DEFAULT_FRACTION_DIGITS)
}

/// Evaluate `prev op current`, rendering at most `max_fraction_digits`
/// fractional digits.
///
/// An operand that does not parse as a finite number makes the whole
/// evaluation fall back to `"0"`. Keypad input cannot produce such an
/// operand; it only happens when the error sentinel is reused.
pub fn calculate_with_precision(
    prev: &str,
    current: &str,
    op: Operator,
    max_fraction_digits: usize,
) -> Result<String, ArithmeticError> {
    let (Some(lhs), Some(rhs)) = (parse_operand(prev), parse_operand(current)) else {
        debug!(prev, current, "unparseable operand, evaluating to zero");
        return Ok("0".to_string());
    };

    if op == Operator::Divide && rhs == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }

    let result = op.apply(lhs, rhs);
    if !result.is_finite() {
        return Err(ArithmeticError::NotFinite { operator: op });
    }

    Ok(format_number(result, max_fraction_digits))
}

/// Render a finite number for the display.
///
/// Integers print without a decimal point. Anything else is rounded to
/// `max_fraction_digits` places with trailing zeros (and a dangling
/// decimal point) removed. Negative zero prints as `"0"`.
///
/// ```rust
/// use tally::core::format_number;
///
/// assert_eq!(format_number(10.0, 8), "10");
/// assert_eq!(format_number(0.1 + 0.2, 8), "0.3");
/// assert_eq!(format_number(-2.5, 8), "-2.5");
/// ```
pub fn format_number(value: f64, max_fraction_digits: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };

    if value.fract() == 0.0 {
        return format!("{value}");
    }

    let fixed = format!("{value:.max_fraction_digits$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
