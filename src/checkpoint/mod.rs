//! Checkpoint and resume for trained engines.
//!
//! A checkpoint captures everything an engine has learned: the transition
//! records, both cursors and the session counters. Capabilities are not
//! serializable; they are re-resolved against a target on resume.

use crate::core::{FallbackPolicy, Symbol, TransitionRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;
mod validation;

pub use error::{CheckpointError, CheckpointViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Session counters tracked by an engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineMetadata {
    /// When the engine was created
    pub created_at: DateTime<Utc>,

    /// Last train or step
    pub updated_at: DateTime<Utc>,

    /// Number of `train` calls
    pub observations: usize,

    /// Number of `step` calls that ran on a trained engine
    pub steps: usize,

    /// Capabilities invoked successfully
    pub dispatches: usize,

    /// Steps that reached a symbol with no bound capability
    pub unbound: usize,

    /// Capabilities that returned an error or panicked
    pub failures: usize,
}

impl Default for EngineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            observations: 0,
            steps: 0,
            dispatches: 0,
            unbound: 0,
            failures: 0,
        }
    }
}

impl EngineMetadata {
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Serializable snapshot of an engine's learned state.
/// Does NOT include capabilities (not serializable).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: Symbol> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Transition records in first-seen order
    pub records: Vec<TransitionRecord<S>>,

    /// Fallback policy the model sampled with
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// Symbol the next training observation will follow
    pub training_cursor: S,

    /// Symbol the next step will act on
    pub play_cursor: S,

    /// Whether any training observation was received
    pub trained: bool,

    /// Session counters
    pub metadata: EngineMetadata,
}

impl<S: Symbol> Checkpoint<S> {
    pub(crate) fn capture(
        records: Vec<TransitionRecord<S>>,
        fallback: FallbackPolicy,
        training_cursor: S,
        play_cursor: S,
        trained: bool,
        metadata: EngineMetadata,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            records,
            fallback,
            training_cursor,
            play_cursor,
            trained,
            metadata,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Serialize to the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format, rejecting unsupported versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Number of observed transitions across all records.
    pub fn observation_count(&self) -> usize {
        self.records.iter().map(|r| r.observed_next().len()).sum()
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}
