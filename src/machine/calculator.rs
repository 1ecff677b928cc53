//! Calculator input state machine.

use crate::builder::{CalculatorBuilder, CalculatorConfig};
use crate::core::{
    calculate_with_precision, ArithmeticError, CalculatorState, History, HistoryItem, Operator,
    Phase, ERROR_SENTINEL,
};
use crate::machine::action::Action;
use crate::persistence::{HistoryCache, HistoryStore};
use chrono::Utc;
use tracing::{debug, warn};

/// Calculator session: input state plus a persisted history cache.
///
/// Every input method runs to completion synchronously and never fails.
/// Arithmetic faults surface as the `"ERROR"` display sentinel; storage
/// faults are logged and the in-memory history carries on.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
/// use tally::machine::Calculator;
/// use tally::persistence::MemoryStore;
///
/// let mut calc = Calculator::new(MemoryStore::new());
/// calc.input_digit('7');
/// calc.input_operator(Operator::Add);
/// calc.input_digit('3');
/// calc.input_equals();
///
/// assert_eq!(calc.display(), "10");
/// assert_eq!(calc.expression(), "7 + 3 =");
/// assert_eq!(calc.history().items()[0].result, "10");
/// ```
pub struct Calculator<St: HistoryStore> {
    state: CalculatorState,
    history: HistoryCache<St>,
    max_fraction_digits: usize,
    history_visible: bool,
}

impl<St: HistoryStore> Calculator<St> {
    /// Start a session with the default configuration, restoring any
    /// history already in `store`.
    pub fn new(store: St) -> Self {
        Self::from_config(store, CalculatorConfig::default())
    }

    /// Start configuring a session backed by `store`.
    pub fn builder(store: St) -> CalculatorBuilder<St> {
        CalculatorBuilder::new(store)
    }

    /// Assemble a session from an already validated configuration.
    pub(crate) fn from_config(store: St, config: CalculatorConfig) -> Self {
        let history = HistoryCache::restore(store, config.storage_key, config.history_capacity);
        Self {
            state: CalculatorState::default(),
            history,
            max_fraction_digits: config.max_fraction_digits,
            history_visible: false,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn expression(&self) -> &str {
        &self.state.expression
    }

    pub fn is_error(&self) -> bool {
        self.state.error
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Completed calculations, newest first.
    pub fn history(&self) -> &History {
        self.history.history()
    }

    pub fn history_cache(&self) -> &HistoryCache<St> {
        &self.history
    }

    pub fn is_history_visible(&self) -> bool {
        self.history_visible
    }

    /// Translate one UI event into the matching operation.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, phase = self.phase().name(), "dispatching action");
        match action {
            Action::Digit(digit) => self.input_digit(digit),
            Action::Decimal => self.input_decimal(),
            Action::Operator(op) => self.input_operator(op),
            Action::Equals => self.input_equals(),
            Action::ClearAll => self.clear_all(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Backspace => self.backspace(),
            Action::ToggleHistory => self.toggle_history(),
            Action::SelectHistory(timestamp) => {
                self.select_history(timestamp);
            }
            Action::ClearHistory => self.clear_history(),
        }
    }

    /// Type one digit `0`-`9`. Other characters are ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            debug!(%digit, "ignoring non-digit input");
            return;
        }

        let state = &mut self.state;
        state.error = false;

        if state.is_new_number || state.shows_error() {
            state.display = digit.to_string();
            state.is_new_number = false;
        } else if state.display == "0" {
            state.display = digit.to_string();
        } else if state.display == "-0" {
            state.display = format!("-{digit}");
        } else {
            state.display.push(digit);
        }
    }

    /// Type a decimal point; a second point in one operand is ignored.
    pub fn input_decimal(&mut self) {
        let state = &mut self.state;
        state.error = false;

        if state.is_new_number || state.shows_error() {
            state.display = "0.".to_string();
            state.is_new_number = false;
        } else if !state.display.contains('.') {
            state.display.push('.');
        }
    }

    /// Select `op` as the pending operator.
    ///
    /// When an operation is already pending and its right operand has
    /// been typed, that operation is evaluated first and its result
    /// becomes the new left operand.
    pub fn input_operator(&mut self, op: Operator) {
        self.state.error = false;

        let pending = match (&self.state.previous_value, self.state.operation) {
            (Some(prev), Some(pending)) if !self.state.is_new_number => {
                Some((prev.clone(), pending))
            }
            _ => None,
        };

        if let Some((prev, pending)) = pending {
            let result = self.evaluate(&prev, pending);
            self.state.expression = format!("{result} {op}");
            self.state.display = result.clone();
            self.state.previous_value = Some(result);
        } else {
            self.state.expression = format!("{} {op}", self.state.display);
            self.state.previous_value = Some(self.state.display.clone());
        }

        self.state.operation = Some(op);
        self.state.is_new_number = true;
    }

    /// Evaluate the pending operation and record it in the history.
    ///
    /// Without a pending operation this does nothing, so a second `=` in
    /// a row leaves the display untouched.
    pub fn input_equals(&mut self) {
        let (Some(prev), Some(op)) = (self.state.previous_value.clone(), self.state.operation)
        else {
            debug!("no pending operation, ignoring equals");
            return;
        };

        let full_expression = format!("{} {} =", self.state.expression, self.state.display);
        let result = match calculate_with_precision(
            &prev,
            &self.state.display,
            op,
            self.max_fraction_digits,
        ) {
            Ok(result) => {
                self.record(&full_expression, &result);
                result
            }
            Err(e) => self.fail(e),
        };

        self.state.display = result;
        self.state.expression = full_expression;
        self.state.previous_value = None;
        self.state.operation = None;
        self.state.is_new_number = true;
    }

    /// Flip the sign of the display. `"0"` and the error sentinel are left alone.
    pub fn toggle_sign(&mut self) {
        if self.state.display == "0" || self.state.shows_error() {
            return;
        }

        let display = &mut self.state.display;
        if display.starts_with('-') {
            display.remove(0);
        } else {
            display.insert(0, '-');
        }
    }

    /// Delete the last typed character.
    pub fn backspace(&mut self) {
        let state = &mut self.state;

        if state.shows_error() {
            state.display.clear();
            state.error = false;
        } else {
            state.display.pop();
        }

        if state.display.is_empty() || state.display == "-" {
            state.display = "0".to_string();
            state.is_new_number = true;
        }
    }

    /// Reset the input state. History is untouched.
    pub fn clear_all(&mut self) {
        self.state = CalculatorState::default();
    }

    /// Put a past result on the display as a fresh operand.
    ///
    /// Items whose result is not a finite number are ignored.
    pub fn load_from_history(&mut self, item: &HistoryItem) {
        if !item.is_well_formed() {
            debug!(timestamp = item.timestamp, "ignoring malformed history item");
            return;
        }
        self.state = CalculatorState {
            display: item.result.clone(),
            ..CalculatorState::default()
        };
    }

    /// Load the history item created at `timestamp`.
    ///
    /// Returns `false` if no such item exists.
    pub fn select_history(&mut self, timestamp: i64) -> bool {
        let Some(item) = self.history.history().find(timestamp).cloned() else {
            debug!(timestamp, "no history item with this timestamp");
            return false;
        };
        self.load_from_history(&item);
        true
    }

    /// Empty the history and its persisted copy.
    pub fn clear_history(&mut self) {
        if let Err(e) = self.history.clear() {
            warn!(error = %e, "failed to remove persisted history");
        }
    }

    /// Show or hide the history panel. Has no effect on calculation.
    pub fn toggle_history(&mut self) {
        self.history_visible = !self.history_visible;
    }

    fn evaluate(&mut self, prev: &str, op: Operator) -> String {
        match calculate_with_precision(prev, &self.state.display, op, self.max_fraction_digits) {
            Ok(result) => result,
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: ArithmeticError) -> String {
        debug!(%error, "evaluation failed");
        self.state.error = true;
        ERROR_SENTINEL.to_string()
    }

    fn record(&mut self, expression: &str, result: &str) {
        let now = Utc::now().timestamp_millis();
        let timestamp = self.history.history().next_timestamp(now);
        let item = HistoryItem::new(expression, result, timestamp);

        if let Err(e) = self.history.append(item) {
            warn!(error = %e, "failed to persist history");
        }
    }
}
