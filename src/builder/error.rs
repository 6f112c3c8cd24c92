//! Build errors for the engine builder.

use crate::checkpoint::CheckpointError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No actions requested. Call .actions(..) or .action(..) before .build()")]
    NoActions,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Cannot resume from checkpoint: {0}")]
    Checkpoint(#[from] CheckpointError),
}
