//! Capability and dispatch errors.

use thiserror::Error;

/// Error raised by a capability when it is invoked
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CapabilityError {
    /// The capability ran but could not perform its action
    #[error("{0}")]
    Failed(String),
}

impl CapabilityError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Failure of a bound capability during dispatch.
///
/// Dispatch failures are reported, never propagated: the engine still
/// advances its cursor and the driving loop carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Capability for '{symbol}' failed: {source}")]
    Failed {
        symbol: String,
        #[source]
        source: CapabilityError,
    },

    #[error("Capability for '{symbol}' panicked: {message}")]
    Panicked { symbol: String, message: String },
}

impl DispatchError {
    /// Name of the symbol whose capability failed.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Failed { symbol, .. } | Self::Panicked { symbol, .. } => symbol,
        }
    }
}
