//! Symbol → capability registry.
//!
//! The registry is built once, when the engine is constructed, by resolving
//! a list of desired symbols against a [`Target`]. Symbols the target cannot
//! provide are left out; dispatching them later is a silent skip rather than
//! an error.

mod capability;
mod error;

pub use capability::{Capability, CapabilitySet, Controllable, Method, Target};
pub use error::{CapabilityError, DispatchError};

use crate::core::Symbol;
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

/// Outcome of dispatching a single symbol
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch {
    /// The bound capability ran and succeeded
    Invoked,

    /// No capability is bound to the symbol
    Unbound,

    /// The bound capability returned an error or panicked
    Failed(DispatchError),
}

/// Closed mapping from symbols to bound capabilities.
pub struct ActionRegistry<S: Symbol> {
    bindings: HashMap<S, Capability>,
    order: Vec<S>,
}

impl<S: Symbol> ActionRegistry<S> {
    /// Resolve `desired` against `target`, keeping only the matches.
    ///
    /// `NONE` is never bound, and a symbol listed twice is bound once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mimicry::core::ActionName;
    /// use mimicry::registry::{ActionRegistry, CapabilitySet};
    ///
    /// let target = CapabilitySet::new()
    ///     .bind(ActionName::new("up"), || Ok(()))
    ///     .bind(ActionName::new("left"), || Ok(()));
    ///
    /// let desired: Vec<ActionName> = ["up", "down", "left"]
    ///     .into_iter()
    ///     .map(ActionName::from)
    ///     .collect();
    ///
    /// let registry = ActionRegistry::resolve(&target, &desired);
    /// assert_eq!(registry.len(), 2);
    /// assert!(registry.contains(&ActionName::new("up")));
    /// assert!(!registry.contains(&ActionName::new("down")));
    /// ```
    pub fn resolve<T>(target: &T, desired: &[S]) -> Self
    where
        T: Target<S> + ?Sized,
    {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        for symbol in desired {
            if symbol.is_none() || registry.bindings.contains_key(symbol) {
                continue;
            }
            match target.capability(symbol) {
                Some(capability) => {
                    tracing::debug!("Bound capability: {}", symbol.name());
                    registry.bindings.insert(symbol.clone(), capability);
                    registry.order.push(symbol.clone());
                }
                None => {
                    tracing::debug!("No capability for '{}', leaving it unbound", symbol.name());
                }
            }
        }

        registry
    }

    /// Invoke the capability bound to `symbol`.
    ///
    /// Errors and panics raised by the capability are caught and returned as
    /// [`Dispatch::Failed`].
    pub fn dispatch(&self, symbol: &S) -> Dispatch {
        let Some(capability) = self.bindings.get(symbol) else {
            return Dispatch::Unbound;
        };

        match panic::catch_unwind(AssertUnwindSafe(|| capability())) {
            Ok(Ok(())) => Dispatch::Invoked,
            Ok(Err(source)) => Dispatch::Failed(DispatchError::Failed {
                symbol: symbol.name().to_string(),
                source,
            }),
            Err(payload) => Dispatch::Failed(DispatchError::Panicked {
                symbol: symbol.name().to_string(),
                message: panic_message(payload.as_ref()),
            }),
        }
    }

    /// Get the capability bound to a symbol.
    pub fn get(&self, symbol: &S) -> Option<&Capability> {
        self.bindings.get(symbol)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.bindings.contains_key(symbol)
    }

    /// Bound symbols in the order they were requested.
    pub fn symbols(&self) -> &[S] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
