//! Calculator state.
//!
//! The state is a plain value. Every transition function takes a state and
//! returns a new one without side effects.

use super::number::parse_operand;
use super::operator::OperatorKind;
use serde::{Deserialize, Serialize};

/// Display text of a freshly cleared calculator.
pub const INITIAL_DISPLAY: &str = "0";

/// Where the calculator is in its input cycle.
///
/// Derived from [`CalculatorState`]; used for logging and by presentation
/// layers that want to highlight the pending operator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first operand (or editing a result).
    Entering,
    /// An operator was pressed; the next digit starts the second operand.
    AwaitingOperand,
    /// Typing the second operand of a pending operation.
    EnteringOperand,
    /// A result is displayed and no operation is pending.
    ShowingResult,
}

impl Phase {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::EnteringOperand => "EnteringOperand",
            Self::ShowingResult => "ShowingResult",
        }
    }
}

/// The complete input state of the calculator.
///
/// `operation` is `None` exactly when no binary operation is pending, and
/// `previous_value` is set whenever an operation is pending.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.display(), "0");
/// assert_eq!(state.value(), 0.0);
/// assert_eq!(state.phase(), Phase::Entering);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) previous_value: Option<f64>,
    pub(crate) operation: Option<OperatorKind>,
    pub(crate) waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The initial state: display `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
        }
    }

    /// Text currently on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Numeric value of the display.
    pub fn value(&self) -> f64 {
        parse_operand(&self.display)
    }

    /// Left operand of the pending operation, if any.
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// Operation waiting for its right operand, if any.
    pub fn operation(&self) -> Option<OperatorKind> {
        self.operation
    }

    /// Whether the next digit starts a fresh number.
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Whether an operation is pending.
    pub fn has_pending_operation(&self) -> bool {
        self.operation.is_some()
    }

    /// Current input phase.
    pub fn phase(&self) -> Phase {
        match (self.operation.is_some(), self.waiting_for_operand) {
            (true, true) => Phase::AwaitingOperand,
            (true, false) => Phase::EnteringOperand,
            (false, true) => Phase::ShowingResult,
            (false, false) => Phase::Entering,
        }
    }

    /// Check the pending-operation invariant.
    ///
    /// Holds for every state produced by the transition functions; states
    /// read from outside (snapshots) may violate it.
    pub fn is_consistent(&self) -> bool {
        self.previous_value.is_some() == self.operation.is_some()
    }
}
