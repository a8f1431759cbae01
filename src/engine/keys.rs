//! Keypad labels to input events.
//!
//! Sequences are checked with Stillwater's `Validation` so that every
//! unrecognized key is reported at once, not just the first.

use crate::core::{Digit, InputEvent, OperatorKind};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A key label that maps to no event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unrecognized key '{key}'")]
    Unrecognized { key: String },

    #[error("Unrecognized key '{key}' at position {position}")]
    UnrecognizedAt { key: String, position: usize },
}

/// Every bad key in a rejected sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{} unrecognized key(s): {}", .0.len(), describe(.0))]
pub struct KeySequenceError(pub Vec<KeyError>);

fn describe(errors: &[KeyError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Map one keypad label to its event.
///
/// Recognized labels:
/// - `0`..`9`: digits
/// - `.`: decimal point
/// - `+`, `-`, `×` (`*`, `x`), `÷` (`/`): operators
/// - `=`: equals
/// - `C` / `Clear`: clear
/// - `CH` / `ClearHistory`: clear history
/// - `H` / `History`: toggle the history panel
///
/// # Example
///
/// ```rust
/// use keycalc::core::{InputEvent, OperatorKind};
/// use keycalc::engine::parse_key;
///
/// assert_eq!(parse_key("×"), Ok(InputEvent::Operator(OperatorKind::Multiply)));
/// assert_eq!(parse_key("="), Ok(InputEvent::Equals));
/// assert!(parse_key("%").is_err());
/// ```
pub fn parse_key(label: &str) -> Result<InputEvent, KeyError> {
    let label = label.trim();
    let mut chars = label.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(digit) = Digit::from_char(c) {
            return Ok(InputEvent::Digit(digit));
        }
    }

    match label {
        "." => Ok(InputEvent::DecimalPoint),
        "=" => Ok(InputEvent::Equals),
        "C" | "Clear" => Ok(InputEvent::Clear),
        "CH" | "ClearHistory" => Ok(InputEvent::ClearHistory),
        "H" | "History" => Ok(InputEvent::ToggleHistory),
        other => other
            .parse::<OperatorKind>()
            .map(InputEvent::Operator)
            .map_err(|_| KeyError::Unrecognized {
                key: other.to_string(),
            }),
    }
}

/// Map a sequence of labels, accumulating ALL unrecognized keys.
///
/// ```rust
/// use keycalc::engine::parse_keys;
/// use stillwater::validation::Validation;
///
/// match parse_keys(["7", "%", "8", "?"]) {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
///     Validation::Success(_) => panic!("expected failures"),
/// }
/// ```
pub fn parse_keys<I, S>(keys: I) -> Validation<Vec<InputEvent>, NonEmptyVec<KeyError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let checks: Vec<Validation<InputEvent, NonEmptyVec<KeyError>>> = keys
        .into_iter()
        .enumerate()
        .map(|(position, key)| match parse_key(key.as_ref()) {
            Ok(event) => Validation::success(event),
            Err(_) => Validation::fail(KeyError::UnrecognizedAt {
                key: key.as_ref().trim().to_string(),
                position,
            }),
        })
        .collect();

    Validation::all_vec(checks)
}
