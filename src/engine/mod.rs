//! The imperative shell around the pure core.
//!
//! The [`Calculator`] owns a [`CalculatorState`](crate::core::CalculatorState)
//! and a [`CalculationHistory`](crate::core::CalculationHistory), dispatches
//! input events through the pure transitions, stamps completed calculations
//! and logs what happened via `tracing`.
//!
//! Keypad labels (`"7"`, `"×"`, `"="`, ...) are mapped to events by
//! [`parse_key`] and [`parse_keys`].

mod calculator;
mod keys;

pub use calculator::{Calculator, Outcome};
pub use keys::{parse_key, parse_keys, KeyError, KeySequenceError};
