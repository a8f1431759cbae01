//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The input state via [`CalculatorState`]
//! - Operators and the arithmetic core via [`OperatorKind`]
//! - Number rendering and parsing for the display
//! - Immutable calculation history
//! - Pure transition functions from (state, event) to the next state
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod event;
mod history;
mod number;
mod operator;
mod state;
pub mod transition;

pub use event::{Digit, InputEvent};
pub use history::{Calculation, CalculationHistory, HistoryEntry};
pub use number::{format_number, parse_operand};
pub use operator::{OperatorKind, UnknownOperator};
pub use state::{CalculatorState, Phase, INITIAL_DISPLAY};
pub use transition::{transition, Step};
