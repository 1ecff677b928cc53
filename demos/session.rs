//! Scripted calculator session backed by a history file.
//!
//! Run with `cargo run --example session -- [DIR]`. History is kept in
//! `DIR/calculator-history.json` (default: the system temp directory), so
//! running the demo twice shows the first run's results restored.
//!
//! Set `RUST_LOG=tally=debug` to see state machine and storage events.

use std::env;
use std::path::PathBuf;
use tally::{Action, Calculator, FileStore};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("tally-demo"));

    let mut calc = Calculator::new(FileStore::new(&dir));
    println!("History restored from {}:", dir.display());
    print_history(&calc);

    let script = [
        vec!["7", "+", "3", "="],
        vec!["5", "÷", "0", "="],
        vec!["2", ".", "5", "×", "4", "="],
        vec!["1", "2", "+", "8", "−", "5", "×", "3", "="],
    ];

    for keys in script {
        calc.dispatch(Action::ClearAll);
        for key in &keys {
            calc.dispatch(key.parse::<Action>()?);
        }
        let flag = if calc.is_error() { "  (error)" } else { "" };
        println!("{:<28} -> {}{flag}", calc.expression(), calc.display());
    }

    println!();
    println!("History now:");
    print_history(&calc);
    Ok(())
}

fn print_history(calc: &Calculator<FileStore>) {
    if calc.history().is_empty() {
        println!("  No calculations yet");
        return;
    }
    for item in calc.history().items() {
        let when = item
            .created_at()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        println!("  {when}  {} {}", item.expression, item.result);
    }
}
