//! Property-based tests for the calculator state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tally::core::{calculate, History, HistoryItem, Operator};
use tally::{Action, Calculator, MemoryStore};

prop_compose! {
    fn arbitrary_operator()(variant in 0..5usize) -> Operator {
        Operator::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_action()(variant in 0..8u8, digit in 0..10u32, op in arbitrary_operator()) -> Action {
        match variant {
            0 | 1 | 2 => Action::Digit(char::from_digit(digit, 10).unwrap_or('0')),
            3 => Action::Decimal,
            4 => Action::Operator(op),
            5 => Action::Equals,
            6 => Action::ToggleSign,
            _ => Action::Backspace,
        }
    }
}

fn is_numeric_literal(display: &str) -> bool {
    display.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

proptest! {
    #[test]
    fn digits_concatenate(digits in "[1-9][0-9]{0,14}") {
        let mut calc = Calculator::new(MemoryStore::new());
        for digit in digits.chars() {
            calc.input_digit(digit);
        }
        prop_assert_eq!(calc.display(), digits.as_str());
    }

    #[test]
    fn leading_zeros_collapse(zeros in 1..5usize, digits in "[1-9][0-9]{0,8}") {
        let mut calc = Calculator::new(MemoryStore::new());
        for _ in 0..zeros {
            calc.input_digit('0');
        }
        prop_assert_eq!(calc.display(), "0");
        for digit in digits.chars() {
            calc.input_digit(digit);
        }
        prop_assert_eq!(calc.display(), digits.as_str());
    }

    #[test]
    fn decimal_is_idempotent(prefix in "[0-9]{0,6}", presses in 1..6usize) {
        let mut calc = Calculator::new(MemoryStore::new());
        for digit in prefix.chars() {
            calc.input_digit(digit);
        }
        for _ in 0..presses {
            calc.input_decimal();
        }
        prop_assert_eq!(calc.display().matches('.').count(), 1);
        prop_assert!(calc.display().ends_with('.'));
    }

    #[test]
    fn division_matches_float_division(a in -1_000_000i32..1_000_000, b in -1_000i32..1_000) {
        prop_assume!(b != 0);
        let result = calculate(&a.to_string(), &b.to_string(), Operator::Divide).unwrap();
        let parsed: f64 = result.parse().unwrap();
        let expected = f64::from(a) / f64::from(b);
        prop_assert!((parsed - expected).abs() <= 1e-8 * expected.abs().max(1.0));
    }

    #[test]
    fn division_by_zero_sets_error(a in -1_000_000i32..1_000_000) {
        let mut calc = Calculator::new(MemoryStore::new());
        calc.dispatch(Action::ClearAll);
        for digit in a.unsigned_abs().to_string().chars() {
            calc.input_digit(digit);
        }
        if a < 0 {
            calc.toggle_sign();
        }
        calc.input_operator(Operator::Divide);
        calc.input_digit('0');
        calc.input_equals();

        prop_assert_eq!(calc.display(), "ERROR");
        prop_assert!(calc.is_error());
        prop_assert!(calc.history().is_empty());
    }

    #[test]
    fn history_never_exceeds_capacity(count in 0..120usize, capacity in 1..60usize) {
        let mut history = History::with_capacity(capacity);
        for n in 0..count {
            history = history.record(HistoryItem::new("1 + 1 =", "2", n as i64));
        }
        prop_assert_eq!(history.len(), count.min(capacity));
        if count > 0 {
            prop_assert_eq!(history.newest().map(|i| i.timestamp), Some(count as i64 - 1));
        }
    }

    #[test]
    fn clear_all_matches_fresh_session(
        actions in prop::collection::vec(arbitrary_action(), 0..30),
        digit in 0..10u32,
    ) {
        let digit = char::from_digit(digit, 10).unwrap_or('0');

        let mut used = Calculator::new(MemoryStore::new());
        for action in actions {
            used.dispatch(action);
        }
        used.clear_all();
        used.input_digit(digit);

        let mut fresh = Calculator::new(MemoryStore::new());
        fresh.input_digit(digit);

        prop_assert_eq!(used.state(), fresh.state());
    }

    #[test]
    fn display_is_always_numeric_or_sentinel(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut calc = Calculator::new(MemoryStore::new());
        for action in actions {
            calc.dispatch(action);
            let display = calc.display();
            prop_assert!(
                display == "ERROR" || is_numeric_literal(display),
                "display {:?} is not numeric", display
            );
        }
    }

    #[test]
    fn history_stays_newest_first(
        actions in prop::collection::vec(arbitrary_action(), 0..60)
    ) {
        let mut calc = Calculator::new(MemoryStore::new());
        for action in actions {
            calc.dispatch(action);
        }
        let stamps: Vec<i64> = calc.history().items().iter().map(|i| i.timestamp).collect();
        prop_assert!(stamps.windows(2).all(|pair| pair[0] > pair[1]));
        prop_assert!(stamps.len() <= 50);
    }
}
