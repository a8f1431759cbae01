//! Input events consumed by the calculator.

use super::operator::OperatorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Returns `None` unless `value` is in `0..=9`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Digit for an ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A button press.
///
/// `ClearHistory` and `ToggleHistory` concern the history log and panel;
/// they never change the [`CalculatorState`](super::CalculatorState).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    Digit(Digit),
    DecimalPoint,
    Operator(OperatorKind),
    Equals,
    Clear,
    ClearHistory,
    ToggleHistory,
}

impl InputEvent {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::DecimalPoint => "DecimalPoint",
            Self::Operator(_) => "Operator",
            Self::Equals => "Equals",
            Self::Clear => "Clear",
            Self::ClearHistory => "ClearHistory",
            Self::ToggleHistory => "ToggleHistory",
        }
    }

    /// Whether the event affects only the history log or panel.
    pub fn is_history_event(&self) -> bool {
        matches!(self, Self::ClearHistory | Self::ToggleHistory)
    }
}

impl From<Digit> for InputEvent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<OperatorKind> for InputEvent {
    fn from(operator: OperatorKind) -> Self {
        Self::Operator(operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_accepts_only_decimal_range() {
        assert_eq!(Digit::new(0), Some(Digit::ZERO));
        assert_eq!(Digit::new(9).map(|d| d.value()), Some(9));
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn digit_from_char() {
        assert_eq!(Digit::from_char('7').map(|d| d.value()), Some(7));
        assert!(Digit::from_char('a').is_none());
        assert_eq!(Digit::new(4).unwrap().as_char(), '4');
    }

    #[test]
    fn digit_rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<Digit>("5").is_ok());
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }

    #[test]
    fn history_events_are_identified() {
        assert!(InputEvent::ClearHistory.is_history_event());
        assert!(InputEvent::ToggleHistory.is_history_event());
        assert!(!InputEvent::Clear.is_history_event());
        assert!(!InputEvent::Operator(OperatorKind::Add).is_history_event());
    }

    #[test]
    fn conversions_build_events() {
        let digit = Digit::new(3).unwrap();
        assert_eq!(InputEvent::from(digit), InputEvent::Digit(digit));
        assert_eq!(
            InputEvent::from(OperatorKind::Subtract),
            InputEvent::Operator(OperatorKind::Subtract)
        );
        assert_eq!(InputEvent::Equals.name(), "Equals");
    }
}
