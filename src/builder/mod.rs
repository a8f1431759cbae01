//! Builder API for configuring a calculator.
//!
//! A calculator needs no configuration to run; the builder covers the
//! optional knobs: a cap on the history length, the initial visibility of the
//! history panel, and history carried over from an earlier session.

pub mod error;

pub use error::BuildError;

use crate::core::{CalculationHistory, CalculatorState, HistoryEntry};
use crate::engine::Calculator;

/// Builder for constructing a [`Calculator`] with a fluent API.
///
/// # Example
///
/// ```
/// use keycalc::builder::CalculatorBuilder;
///
/// let calculator = CalculatorBuilder::new()
///     .history_limit(50)
///     .show_history(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.history().limit(), Some(50));
/// assert!(calculator.is_history_visible());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    history_limit: Option<usize>,
    show_history: bool,
    history: Vec<HistoryEntry>,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` history entries, dropping the oldest.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Start with the history panel toggled on or off.
    pub fn show_history(mut self, visible: bool) -> Self {
        self.show_history = visible;
        self
    }

    /// Seed the history with entries ordered newest first.
    pub fn history<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = HistoryEntry>,
    {
        self.history.extend(entries);
        self
    }

    /// Build the calculator.
    /// Returns an error if the history settings are inconsistent.
    pub fn build(self) -> Result<Calculator, BuildError> {
        if let Some(limit) = self.history_limit {
            if limit == 0 {
                return Err(BuildError::ZeroHistoryLimit);
            }
            if self.history.len() > limit {
                return Err(BuildError::HistoryExceedsLimit {
                    entries: self.history.len(),
                    limit,
                });
            }
        }

        let history = CalculationHistory::from_entries(self.history, self.history_limit);
        Ok(Calculator::from_parts(
            CalculatorState::new(),
            history,
            self.show_history,
        ))
    }
}
