//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("History limit must be at least 1. Omit .history_limit() for an unbounded history")]
    ZeroHistoryLimit,

    #[error("History has {entries} entries but the limit is {limit}")]
    HistoryExceedsLimit { entries: usize, limit: usize },
}
