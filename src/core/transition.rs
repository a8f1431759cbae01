//! Pure state transitions.
//!
//! Each function takes the current [`CalculatorState`] and returns the next
//! one. None of them fail: a second decimal point or an equals press with
//! nothing pending simply returns the state unchanged.

use super::event::{Digit, InputEvent};
use super::history::Calculation;
use super::number::{format_number, parse_operand};
use super::operator::OperatorKind;
use super::state::{CalculatorState, INITIAL_DISPLAY};

/// Result of applying one event.
#[derive(Clone, PartialEq, Debug)]
pub struct Step {
    /// The state after the event.
    pub state: CalculatorState,
    /// Set when the event completed a calculation with equals.
    pub calculation: Option<Calculation>,
}

impl Step {
    fn to(state: CalculatorState) -> Self {
        Self {
            state,
            calculation: None,
        }
    }
}

/// Apply any event to `state`.
///
/// History events return the state unchanged.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{transition, CalculatorState, Digit, InputEvent, OperatorKind};
///
/// let events = [
///     InputEvent::Digit(Digit::new(7).unwrap()),
///     InputEvent::Operator(OperatorKind::Multiply),
///     InputEvent::Digit(Digit::new(8).unwrap()),
///     InputEvent::Equals,
/// ];
///
/// let mut state = CalculatorState::new();
/// let mut last = None;
/// for event in &events {
///     let step = transition(&state, event);
///     state = step.state;
///     last = step.calculation.or(last);
/// }
///
/// assert_eq!(state.display(), "56");
/// assert_eq!(last.map(|c| c.expression()), Some("7 × 8".to_string()));
/// ```
pub fn transition(state: &CalculatorState, event: &InputEvent) -> Step {
    match event {
        InputEvent::Digit(digit) => Step::to(input_digit(state, *digit)),
        InputEvent::DecimalPoint => Step::to(input_decimal_point(state)),
        InputEvent::Operator(operator) => Step::to(set_operation(state, *operator)),
        InputEvent::Equals => equals(state),
        InputEvent::Clear => Step::to(clear(state)),
        InputEvent::ClearHistory | InputEvent::ToggleHistory => Step::to(state.clone()),
    }
}

/// Type a digit.
pub fn input_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    let mut next = state.clone();
    if state.waiting_for_operand {
        next.display = digit.to_string();
        next.waiting_for_operand = false;
    } else if state.display == INITIAL_DISPLAY {
        next.display = digit.to_string();
    } else {
        next.display.push(digit.as_char());
    }
    next
}

/// Type a decimal point.
///
/// A display that already has a point is left as is.
pub fn input_decimal_point(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if state.waiting_for_operand {
        next.display = "0.".to_string();
        next.waiting_for_operand = false;
    } else if !state.display.contains('.') {
        next.display.push('.');
    }
    next
}

/// Reset everything except history (which the state does not hold).
pub fn clear(_state: &CalculatorState) -> CalculatorState {
    CalculatorState::new()
}

/// Press an operator.
///
/// A pending operation is folded into the running value first, so chained
/// operators evaluate left to right with no precedence.
pub fn set_operation(state: &CalculatorState, operator: OperatorKind) -> CalculatorState {
    let input_value = parse_operand(&state.display);
    let mut next = state.clone();

    match (state.previous_value, state.operation) {
        (None, _) => next.previous_value = Some(input_value),
        (Some(previous), Some(pending)) => {
            // A NaN running value restarts the chain from zero.
            let previous = if previous.is_nan() { 0.0 } else { previous };
            let result = pending.apply(previous, input_value);
            next.display = format_number(result);
            next.previous_value = Some(result);
        }
        (Some(_), None) => {}
    }

    next.waiting_for_operand = true;
    next.operation = Some(operator);
    next
}

/// Press equals.
///
/// Completes the pending operation and reports it as a [`Calculation`].
/// Without a pending operation this is a no-op.
pub fn equals(state: &CalculatorState) -> Step {
    let (Some(previous), Some(operation)) = (state.previous_value, state.operation) else {
        return Step::to(state.clone());
    };

    let calculation = Calculation::evaluate(previous, operation, parse_operand(&state.display));
    let next = CalculatorState {
        display: format_number(calculation.result),
        previous_value: None,
        operation: None,
        waiting_for_operand: true,
    };

    Step {
        state: next,
        calculation: Some(calculation),
    }
}
