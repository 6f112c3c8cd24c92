//! Training and replay engine.
//!
//! This module is the imperative shell around the transition model: it
//! owns the cursors, dispatches capabilities and reports failures as
//! values instead of letting them escape into the driving loop.
//!
//! # Key Concepts
//!
//! - **ActionEngine**: trains on player input and steps the mimic
//! - **StepResult**: what a single step did
//! - **Cadence**: fires every N ticks of a driving loop

mod action;
mod cadence;
mod step;

pub use action::ActionEngine;
pub use cadence::Cadence;
pub use step::StepResult;
