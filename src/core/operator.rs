//! Binary operators and the arithmetic core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four calculator operators.
///
/// # Example
///
/// ```rust
/// use keycalc::core::OperatorKind;
///
/// assert_eq!(OperatorKind::Multiply.apply(7.0, 8.0), 56.0);
/// assert_eq!(OperatorKind::Multiply.symbol(), "×");
/// assert_eq!("÷".parse::<OperatorKind>(), Ok(OperatorKind::Divide));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperatorKind {
    /// All operators in keypad order.
    pub const ALL: [OperatorKind; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Symbol shown on the keypad and in history expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Division by zero yields `0.0` rather than an infinity or NaN.
    ///
    /// ```rust
    /// use keycalc::core::OperatorKind;
    ///
    /// assert_eq!(OperatorKind::Divide.apply(9.0, 0.0), 0.0);
    /// assert_eq!(OperatorKind::Divide.apply(9.0, 3.0), 3.0);
    /// ```
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs != 0.0 {
                    lhs / rhs
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a string names no operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an operator")]
pub struct UnknownOperator(pub String);

impl FromStr for OperatorKind {
    type Err = UnknownOperator;

    /// Accepts the keypad symbols plus the ASCII spellings `*`, `x` and `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "×" | "*" | "x" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}
