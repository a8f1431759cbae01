//! Keypad Session
//!
//! This example drives the calculator from keypad labels given on the
//! command line and prints the display and history after each press.
//!
//! Key concepts:
//! - Keys are validated up front; every bad key is reported at once
//! - Operators chain left to right with no precedence
//! - Division by zero displays 0
//!
//! Run with: cargo run --example keypad -- 7 × 8 = H
//! Set RUST_LOG=keycalc=debug to see dispatched events.

use keycalc::{Calculator, Outcome};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== Keypad Session ===\n");

    let mut keys: Vec<String> = std::env::args().skip(1).collect();
    if keys.is_empty() {
        keys = ["5", "+", "3", "+", "2", "=", "9", "÷", "0", "="]
            .iter()
            .map(|k| k.to_string())
            .collect();
        println!("No keys given, using: {}\n", keys.join(" "));
    }

    let mut calculator = Calculator::new();
    let outcomes = match calculator.press_all(&keys) {
        Ok(outcomes) => outcomes,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    for (key, outcome) in keys.iter().zip(&outcomes) {
        match outcome {
            Outcome::Calculated(entry) => println!("{key:>6}  ->  {entry}"),
            Outcome::Updated => println!("{key:>6}  ->  {}", describe_update(key)),
            Outcome::Unchanged => println!("{key:>6}  ->  (no effect)"),
        }
    }

    println!("\nDisplay: {}", calculator.display());

    if calculator.should_show_history() {
        println!("\nHistory:");
        if calculator.history().is_empty() {
            println!("  (no calculations)");
        }
        for entry in calculator.history().entries() {
            println!("  {entry}");
        }
    }

    println!("\n=== Session Complete ===");
}

fn describe_update(key: &str) -> &'static str {
    match key.trim() {
        "H" | "History" => "history panel toggled",
        "CH" | "ClearHistory" => "history cleared",
        "C" | "Clear" => "cleared",
        _ => "updated",
    }
}
