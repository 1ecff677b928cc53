//! UI events accepted by the calculator.
//!
//! This is the thin adapter between a keypad (or keyboard) and the
//! state machine: one variant per button, parsed from button labels.

use crate::core::Operator;
use std::str::FromStr;
use thiserror::Error;

/// A single user interaction.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
/// use tally::machine::Action;
///
/// assert_eq!("7".parse(), Ok(Action::Digit('7')));
/// assert_eq!("÷".parse(), Ok(Action::Operator(Operator::Divide)));
/// assert_eq!("AC".parse(), Ok(Action::ClearAll));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Digit key `0`-`9`
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    ClearAll,
    ToggleSign,
    Backspace,
    /// Show or hide the history panel
    ToggleHistory,
    /// Load the history item with this timestamp
    SelectHistory(i64),
    ClearHistory,
}

/// Returned when a label does not match any button.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown calculator input: {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parse a button label or keyboard key name.
    ///
    /// History selection carries a timestamp and has no label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = match s {
            "." | "," => Self::Decimal,
            "=" | "Enter" => Self::Equals,
            "AC" | "C" | "Escape" => Self::ClearAll,
            "±" | "+/-" => Self::ToggleSign,
            "⌫" | "Backspace" => Self::Backspace,
            "History" => Self::ToggleHistory,
            "Clear History" => Self::ClearHistory,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(digit), None) if digit.is_ascii_digit() => Self::Digit(digit),
                    _ => s
                        .parse::<Operator>()
                        .map(Self::Operator)
                        .map_err(|_| ParseActionError(s.to_string()))?,
                }
            }
        };
        Ok(action)
    }
}
