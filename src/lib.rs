//! Keycalc: a pure four-function calculator engine
//!
//! Keycalc follows the "pure core, imperative shell" philosophy. The
//! calculator's input state machine is a set of pure functions from
//! (state, event) to the next state; a thin owned shell applies them, stamps
//! completed calculations into a history log and reports what happened.
//!
//! # Core Concepts
//!
//! - **State**: The display text, pending operand and operator via `CalculatorState`
//! - **Events**: Button presses (digits, decimal point, operators, equals, clear)
//! - **History**: Immutable, newest-first log of completed calculations
//! - **Snapshots**: Versioned, serializable copies of a whole session
//!
//! Operators chain left to right with no precedence, and division by zero
//! yields `0` instead of an error.
//!
//! # Example
//!
//! ```rust
//! use keycalc::Calculator;
//!
//! let mut calculator = Calculator::new();
//! calculator.press_all(["5", "+", "3", "+", "2", "="]).unwrap();
//! assert_eq!(calculator.display(), "10");
//!
//! calculator.press_all(["9", "÷", "0", "="]).unwrap();
//! assert_eq!(calculator.display(), "0");
//!
//! let latest = calculator.history().latest().unwrap();
//! assert_eq!(latest.expression(), "9 ÷ 0");
//! assert_eq!(latest.result(), 0.0);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use crate::core::{CalculationHistory, CalculatorState, HistoryEntry, InputEvent, OperatorKind};
pub use engine::{Calculator, Outcome};
pub use snapshot::{Snapshot, SnapshotError};
