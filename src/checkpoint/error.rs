//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint data failed validation
    #[error("Checkpoint validation failed with {} violation(s)", .violations.len())]
    ValidationFailed { violations: Vec<CheckpointViolation> },
}

/// A single inconsistency found in checkpoint data
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckpointViolation {
    #[error("No record for the NONE symbol")]
    MissingNoneRecord,

    #[error("Symbol '{symbol}' has more than one record")]
    DuplicateRecord { symbol: String },

    #[error("Transition '{from}' -> '{to}' points at a symbol with no record")]
    DanglingTransition { from: String, to: String },

    #[error("Training cursor '{cursor}' has no record")]
    UnknownTrainingCursor { cursor: String },

    #[error("Play cursor '{cursor}' has no record")]
    UnknownPlayCursor { cursor: String },

    #[error("Trained flag is {trained} but {observations} transition(s) were recorded")]
    TrainedFlagMismatch { trained: bool, observations: usize },
}
