//! Core symbol and transition-model types.
//!
//! This module contains the predictive half of the engine:
//! - Symbol definitions via the `Symbol` trait
//! - Per-symbol observation records
//! - The first-order transition model and its injectable samplers
//!
//! Nothing here knows about capabilities or dispatch.

mod error;
mod model;
mod record;
mod sampler;
mod symbol;

pub use error::ModelError;
pub use model::{FallbackPolicy, TransitionModel};
pub use record::TransitionRecord;
pub use sampler::{FixedIndex, RandomSampler, Sampler, ScriptedSampler};
pub use symbol::{ActionName, Symbol};
