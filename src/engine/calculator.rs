//! The calculator engine: owned state plus history.

use crate::builder::CalculatorBuilder;
use crate::core::{
    transition, CalculationHistory, CalculatorState, Digit, HistoryEntry, InputEvent,
    OperatorKind, Step,
};
use crate::engine::keys::{parse_key, parse_keys, KeyError, KeySequenceError};
use chrono::Utc;
use stillwater::validation::Validation;
use tracing::{debug, trace, warn};

/// What a dispatched event did.
#[derive(Clone, PartialEq, Debug)]
pub enum Outcome {
    /// Nothing changed (second decimal point, equals with nothing pending, ...).
    Unchanged,

    /// The display, pending operation, history or panel changed.
    Updated,

    /// Equals completed a calculation, recorded as this entry.
    Calculated(HistoryEntry),
}

/// Four-function calculator with an operation history.
///
/// Wraps the pure transition functions: each event is applied to the
/// current state, the result replaces it, and completed calculations are
/// stamped and recorded newest first.
///
/// # Example
///
/// ```rust
/// use keycalc::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.press_all(["7", "×", "8", "="]).unwrap();
///
/// assert_eq!(calculator.display(), "56");
/// assert_eq!(calculator.history().len(), 1);
/// assert_eq!(calculator.history().entries()[0].expression(), "7 × 8");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    history: CalculationHistory,
    history_visible: bool,
}

impl Calculator {
    /// Create a calculator in the initial state with an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a calculator.
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub(crate) fn from_parts(
        state: CalculatorState,
        history: CalculationHistory,
        history_visible: bool,
    ) -> Self {
        Self {
            state,
            history,
            history_visible,
        }
    }

    /// Current input state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text currently on the display (pure)
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Completed calculations, newest first (pure)
    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    /// Whether the history panel was toggled on.
    pub fn is_history_visible(&self) -> bool {
        self.history_visible
    }

    /// Whether a presentation layer should show the history panel.
    ///
    /// True when the panel was toggled on or any calculation is recorded.
    pub fn should_show_history(&self) -> bool {
        self.history_visible || !self.history.is_empty()
    }

    /// Apply one event.
    pub fn dispatch(&mut self, event: InputEvent) -> Outcome {
        let outcome = match event {
            InputEvent::ClearHistory => self.apply_clear_history(),
            InputEvent::ToggleHistory => {
                self.history_visible = !self.history_visible;
                Outcome::Updated
            }
            _ => self.apply_transition(&event),
        };

        debug!(
            event = event.name(),
            display = self.state.display(),
            phase = self.state.phase().name(),
            changed = !matches!(outcome, Outcome::Unchanged),
            "dispatched event"
        );
        outcome
    }

    fn apply_transition(&mut self, event: &InputEvent) -> Outcome {
        let Step { state, calculation } = transition(&self.state, event);

        let outcome = match calculation {
            Some(calculation) => {
                let entry = HistoryEntry::new(&calculation, Utc::now());
                debug!(
                    expression = entry.expression(),
                    result = entry.result(),
                    "calculation completed"
                );
                self.history = self.history.record(entry.clone());
                Outcome::Calculated(entry)
            }
            None if state == self.state => {
                trace!(event = event.name(), "event had no effect");
                Outcome::Unchanged
            }
            None => Outcome::Updated,
        };

        self.state = state;
        outcome
    }

    fn apply_clear_history(&mut self) -> Outcome {
        if self.history.is_empty() {
            return Outcome::Unchanged;
        }
        debug!(entries = self.history.len(), "clearing history");
        self.history = self.history.cleared();
        Outcome::Updated
    }

    pub fn input_digit(&mut self, digit: Digit) -> Outcome {
        self.dispatch(InputEvent::Digit(digit))
    }

    pub fn input_decimal_point(&mut self) -> Outcome {
        self.dispatch(InputEvent::DecimalPoint)
    }

    /// Reset the display and pending operation; history is kept.
    pub fn clear(&mut self) -> Outcome {
        self.dispatch(InputEvent::Clear)
    }

    pub fn set_operation(&mut self, operator: OperatorKind) -> Outcome {
        self.dispatch(InputEvent::Operator(operator))
    }

    pub fn equals(&mut self) -> Outcome {
        self.dispatch(InputEvent::Equals)
    }

    /// Empty the history; the display and pending operation are kept.
    pub fn clear_history(&mut self) -> Outcome {
        self.dispatch(InputEvent::ClearHistory)
    }

    pub fn toggle_history(&mut self) -> Outcome {
        self.dispatch(InputEvent::ToggleHistory)
    }

    /// Press a key by its keypad label.
    pub fn press(&mut self, key: &str) -> Result<Outcome, KeyError> {
        let event = parse_key(key).inspect_err(|err| warn!(%err, "rejected key"))?;
        Ok(self.dispatch(event))
    }

    /// Press a sequence of keys.
    ///
    /// The whole sequence is checked first; if any key is unrecognized,
    /// nothing is applied and every bad key is reported.
    pub fn press_all<I, S>(&mut self, keys: I) -> Result<Vec<Outcome>, KeySequenceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let events = match parse_keys(keys) {
            Validation::Success(events) => events,
            Validation::Failure(errors) => {
                let err = KeySequenceError(errors.iter().cloned().collect());
                warn!(%err, "rejected key sequence");
                return Err(err);
            }
        };

        Ok(events
            .into_iter()
            .map(|event| self.dispatch(event))
            .collect())
    }
}
