//! Snapshot and restore for calculator sessions.
//!
//! A [`Snapshot`] captures everything a [`Calculator`] owns: the input state,
//! the history and the panel flag. Snapshots encode to JSON or to a compact
//! binary form; the caller decides where the bytes go.
//!
//! # Example
//!
//! ```rust
//! use keycalc::snapshot::Snapshot;
//! use keycalc::Calculator;
//!
//! let mut calculator = Calculator::new();
//! calculator.press_all(["9", "÷", "0", "="]).unwrap();
//!
//! let json = calculator.snapshot().to_json().unwrap();
//! let restored = Calculator::restore(Snapshot::from_json(&json).unwrap()).unwrap();
//!
//! assert_eq!(restored.display(), "0");
//! assert_eq!(restored.history().entries()[0].expression(), "9 ÷ 0");
//! ```

use crate::core::{CalculationHistory, CalculatorState};
use crate::engine::Calculator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Input state at the time of the snapshot
    pub state: CalculatorState,

    /// Completed calculations, newest first
    pub history: CalculationHistory,

    /// Whether the history panel was toggled on
    pub history_visible: bool,
}

impl Snapshot {
    /// Encode as pretty-printed JSON.
    ///
    /// JSON has no representation for infinities or NaN; sessions holding
    /// such values should use [`to_bytes`](Self::to_bytes).
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON. Does not validate; see [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Encode in binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from binary form. Does not validate; see [`validate`](Self::validate).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Check that the snapshot describes a session this version can resume.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        if !self.state.is_consistent() {
            return Err(SnapshotError::InconsistentState {
                previous_value: self.state.previous_value(),
                operation: self.state.operation(),
            });
        }

        match self.history.limit() {
            Some(0) => Err(SnapshotError::ZeroHistoryLimit),
            Some(limit) if !self.history.is_within_limit() => {
                Err(SnapshotError::HistoryOverLimit {
                    entries: self.history.len(),
                    limit,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Calculator {
    /// Capture the current session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            state: self.state().clone(),
            history: self.history().clone(),
            history_visible: self.is_history_visible(),
        }
    }

    /// Resume a session from a snapshot.
    pub fn restore(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        if let Err(err) = snapshot.validate() {
            warn!(id = %snapshot.id, %err, "rejected snapshot");
            return Err(err);
        }

        debug!(
            id = %snapshot.id,
            display = snapshot.state.display(),
            history = snapshot.history.len(),
            "restoring snapshot"
        );
        Ok(Self::from_parts(
            snapshot.state,
            snapshot.history,
            snapshot.history_visible,
        ))
    }
}
