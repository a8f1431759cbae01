//! Calculation history.
//!
//! History is immutable: recording or clearing returns a new history,
//! leaving the original untouched. Entries are kept newest first.

use super::number::format_number;
use super::operator::OperatorKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed binary calculation.
///
/// Produced by the pure transition functions when equals completes;
/// carries no timestamp so transitions stay deterministic.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Calculation {
    pub lhs: f64,
    pub operator: OperatorKind,
    pub rhs: f64,
    pub result: f64,
}

impl Calculation {
    /// Evaluate `lhs operator rhs`.
    pub fn evaluate(lhs: f64, operator: OperatorKind, rhs: f64) -> Self {
        Self {
            lhs,
            operator,
            rhs,
            result: operator.apply(lhs, rhs),
        }
    }

    /// Expression text, e.g. `"7 × 8"`.
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            format_number(self.lhs),
            self.operator.symbol(),
            format_number(self.rhs)
        )
    }
}

/// One line of the history log.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Calculation, HistoryEntry, OperatorKind};
/// use chrono::Utc;
///
/// let calculation = Calculation::evaluate(7.0, OperatorKind::Multiply, 8.0);
/// let entry = HistoryEntry::new(&calculation, Utc::now());
///
/// assert_eq!(entry.expression(), "7 × 8");
/// assert_eq!(entry.result(), 56.0);
/// assert_eq!(entry.to_string(), "7 × 8 = 56");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    expression: String,
    result: f64,
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Record `calculation` as completed at `timestamp`.
    pub fn new(calculation: &Calculation, timestamp: DateTime<Utc>) -> Self {
        Self {
            expression: calculation.expression(),
            result: calculation.result,
            timestamp,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// When the calculation completed.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, format_number(self.result))
    }
}

/// Ordered log of completed calculations, newest first.
///
/// An optional limit caps the number of entries; recording beyond it drops
/// the oldest entry.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Calculation, CalculationHistory, HistoryEntry, OperatorKind};
/// use chrono::Utc;
///
/// let history = CalculationHistory::new();
/// let first = HistoryEntry::new(&Calculation::evaluate(1.0, OperatorKind::Add, 1.0), Utc::now());
/// let second = HistoryEntry::new(&Calculation::evaluate(2.0, OperatorKind::Add, 2.0), Utc::now());
///
/// let history = history.record(first).record(second);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().map(|e| e.result()), Some(4.0));
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: Vec<HistoryEntry>,
    limit: Option<usize>,
}

impl CalculationHistory {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history holding at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Create a history from entries ordered newest first.
    ///
    /// The caller checks the limit; see [`is_within_limit`](Self::is_within_limit).
    pub fn from_entries(entries: Vec<HistoryEntry>, limit: Option<usize>) -> Self {
        Self { entries, limit }
    }

    /// Record an entry at the front, returning a new history.
    ///
    /// The original history is unchanged.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }
        Self {
            entries,
            limit: self.limit,
        }
    }

    /// An empty history with the same limit.
    pub fn cleared(&self) -> Self {
        Self {
            entries: Vec::new(),
            limit: self.limit,
        }
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the entry count respects the limit.
    pub fn is_within_limit(&self) -> bool {
        self.limit.is_none_or(|limit| self.entries.len() <= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lhs: f64, operator: OperatorKind, rhs: f64) -> HistoryEntry {
        HistoryEntry::new(&Calculation::evaluate(lhs, operator, rhs), Utc::now())
    }

    #[test]
    fn new_history_is_empty() {
        let history = CalculationHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
        assert_eq!(history.limit(), None);
    }

    #[test]
    fn record_prepends_entries() {
        let history = CalculationHistory::new()
            .record(entry(1.0, OperatorKind::Add, 2.0))
            .record(entry(3.0, OperatorKind::Multiply, 4.0));

        let expressions: Vec<&str> = history.entries().iter().map(|e| e.expression()).collect();
        assert_eq!(expressions, vec!["3 × 4", "1 + 2"]);
    }

    #[test]
    fn record_is_immutable() {
        let history = CalculationHistory::new();
        let new_history = history.record(entry(1.0, OperatorKind::Add, 1.0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn limit_evicts_oldest() {
        let history = CalculationHistory::with_limit(2)
            .record(entry(1.0, OperatorKind::Add, 0.0))
            .record(entry(2.0, OperatorKind::Add, 0.0))
            .record(entry(3.0, OperatorKind::Add, 0.0));

        assert_eq!(history.len(), 2);
        let results: Vec<f64> = history.entries().iter().map(|e| e.result()).collect();
        assert_eq!(results, vec![3.0, 2.0]);
        assert!(history.is_within_limit());
    }

    #[test]
    fn cleared_keeps_limit() {
        let history = CalculationHistory::with_limit(5).record(entry(1.0, OperatorKind::Add, 1.0));
        let cleared = history.cleared();

        assert!(cleared.is_empty());
        assert_eq!(cleared.limit(), Some(5));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn expression_uses_display_formatting() {
        let calculation = Calculation::evaluate(0.5, OperatorKind::Divide, 0.0);
        assert_eq!(calculation.expression(), "0.5 ÷ 0");
        assert_eq!(calculation.result, 0.0);

        let calculation = Calculation::evaluate(-2.0, OperatorKind::Subtract, 1.25);
        assert_eq!(calculation.expression(), "-2 - 1.25");
    }

    #[test]
    fn entry_display_includes_result() {
        let entry = entry(9.0, OperatorKind::Divide, 0.0);
        assert_eq!(entry.to_string(), "9 ÷ 0 = 0");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = CalculationHistory::with_limit(3).record(entry(7.0, OperatorKind::Multiply, 8.0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: CalculationHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
