//! Why a snapshot could not be written or restored.

use crate::core::OperatorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not encode snapshot: {0}")]
    SerializationFailed(String),

    #[error("could not decode snapshot: {0}")]
    DeserializationFailed(String),

    #[error("snapshot format v{found} cannot be restored (this build reads v{supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A pending operator without a running value, or the reverse.
    #[error("calculator state is inconsistent: running value {previous_value:?}, pending operator {operation:?}")]
    InconsistentState {
        previous_value: Option<f64>,
        operation: Option<OperatorKind>,
    },

    #[error("history limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("history holds {entries} entries but its limit is {limit}")]
    HistoryOverLimit { entries: usize, limit: usize },
}
