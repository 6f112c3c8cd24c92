//! Mimicry: a lightweight behavioral-mimicry engine
//!
//! Mimicry watches the actions a player performs and learns which action
//! tends to follow which. A second, independently controlled entity can then
//! replay statistically plausible continuations of that behavior, making it a
//! drop-in "trained opponent" instead of a hand-authored one.
//!
//! # Core Concepts
//!
//! - **Symbol**: an opaque action identifier via the `Symbol` trait
//! - **Transition model**: a first-order chain of observed successors,
//!   weighted by repetition
//! - **Registry**: the closed symbol → capability binding built at construction
//! - **Engine**: trains on player input and steps the mimic, reporting
//!   dispatch failures as values
//!
//! # Example
//!
//! ```rust
//! use mimicry::core::{ActionName, FixedIndex};
//! use mimicry::engine::{ActionEngine, StepResult};
//! use mimicry::registry::CapabilitySet;
//! use std::sync::{Arc, Mutex};
//!
//! let moves = Arc::new(Mutex::new(Vec::new()));
//! let left_log = Arc::clone(&moves);
//! let right_log = Arc::clone(&moves);
//!
//! let target = CapabilitySet::new()
//!     .bind(ActionName::new("left"), move || {
//!         left_log.lock().unwrap().push("left");
//!         Ok(())
//!     })
//!     .bind(ActionName::new("right"), move || {
//!         right_log.lock().unwrap().push("right");
//!         Ok(())
//!     });
//!
//! let desired = vec![ActionName::new("left"), ActionName::new("right")];
//! let mut engine = ActionEngine::with_sampler(&target, &desired, FixedIndex(0));
//!
//! for action in ["left", "left", "right", "left"] {
//!     engine.train(ActionName::new(action));
//! }
//!
//! assert!(matches!(engine.step(), StepResult::Idle { .. }));
//! assert!(engine.step().is_dispatched());
//! assert_eq!(*moves.lock().unwrap(), vec!["left"]);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod engine;
pub mod registry;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::EngineConfig;
pub use self::core::{ActionName, FallbackPolicy, Sampler, Symbol, TransitionModel};
pub use engine::{ActionEngine, Cadence, StepResult};
pub use registry::{CapabilityError, CapabilitySet, Controllable, DispatchError, Target};
