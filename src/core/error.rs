//! Transition model errors.

use thiserror::Error;

/// Errors that can occur while sampling from a transition model
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The model has no records to sample from. Constructors always seed
    /// the `NONE` record, so reaching this is an invariant violation.
    #[error("Transition model has no records to sample from")]
    EmptyModel,
}
