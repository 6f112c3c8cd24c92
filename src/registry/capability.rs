//! Capabilities and the adapters that expose them.
//!
//! A capability is a zero-argument action on some target entity. Targets
//! expose their capabilities through the [`Target`] trait: either a
//! closure table ([`CapabilitySet`]) or a shared entity implementing
//! [`Controllable`].

use super::error::CapabilityError;
use crate::core::Symbol;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A bound, zero-argument action.
pub type Capability = Arc<dyn Fn() -> Result<(), CapabilityError> + Send + Sync>;

/// An entity method usable as a capability.
pub type Method<T> = fn(&mut T) -> Result<(), CapabilityError>;

/// Lookup adapter from symbols to the capabilities a target exposes.
///
/// Resolution is an exact symbol match; a `None` result means the target
/// has no capability for that symbol.
pub trait Target<S: Symbol> {
    fn capability(&self, symbol: &S) -> Option<Capability>;
}

/// Closure-backed capability table.
///
/// # Example
///
/// ```rust
/// use mimicry::core::ActionName;
/// use mimicry::registry::{CapabilitySet, Target};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let jumps = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&jumps);
///
/// let set = CapabilitySet::new().bind(ActionName::new("JUMP"), move || {
///     counter.fetch_add(1, Ordering::SeqCst);
///     Ok(())
/// });
///
/// let jump = set.capability(&ActionName::new("JUMP")).unwrap();
/// jump().unwrap();
/// assert_eq!(jumps.load(Ordering::SeqCst), 1);
/// assert!(set.capability(&ActionName::new("DUCK")).is_none());
/// ```
pub struct CapabilitySet<S: Symbol> {
    capabilities: HashMap<S, Capability>,
}

impl<S: Symbol> CapabilitySet<S> {
    pub fn new() -> Self {
        Self {
            capabilities: HashMap::new(),
        }
    }

    /// Bind a closure to a symbol, replacing any earlier binding.
    pub fn bind<F>(mut self, symbol: S, action: F) -> Self
    where
        F: Fn() -> Result<(), CapabilityError> + Send + Sync + 'static,
    {
        self.insert(symbol, Arc::new(action));
        self
    }

    /// Add an already-built capability.
    pub fn insert(&mut self, symbol: S, capability: Capability) {
        self.capabilities.insert(symbol, capability);
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.capabilities.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl<S: Symbol> Default for CapabilitySet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Target<S> for CapabilitySet<S> {
    fn capability(&self, symbol: &S) -> Option<Capability> {
        self.capabilities.get(symbol).map(Arc::clone)
    }
}

/// An entity that lists its own capabilities as methods.
///
/// Share the entity as `Arc<Mutex<T>>` to use it as a [`Target`]: each
/// resolved capability locks the entity and calls the listed method.
///
/// A method that panics poisons the lock. The next capability recovers the
/// entity as the panicking method left it and clears the poison, so one
/// faulty method never disables the others.
///
/// # Example
///
/// ```rust
/// use mimicry::core::ActionName;
/// use mimicry::registry::{CapabilityError, Controllable, Method, Target};
/// use std::sync::{Arc, Mutex, PoisonError};
///
/// #[derive(Default)]
/// struct Counter {
///     value: i32,
/// }
///
/// impl Counter {
///     fn increment(&mut self) -> Result<(), CapabilityError> {
///         self.value += 1;
///         Ok(())
///     }
/// }
///
/// impl Controllable<ActionName> for Counter {
///     fn methods() -> Vec<(ActionName, Method<Self>)> {
///         vec![(ActionName::new("INC"), Counter::increment as Method<Self>)]
///     }
/// }
///
/// let counter = Arc::new(Mutex::new(Counter::default()));
/// let inc = counter.capability(&ActionName::new("INC")).unwrap();
/// inc().unwrap();
/// inc().unwrap();
/// assert_eq!(counter.lock().unwrap().value, 2);
/// ```
pub trait Controllable<S: Symbol>: Sized + Send + 'static {
    fn methods() -> Vec<(S, Method<Self>)>;
}

impl<S, T> Target<S> for Arc<Mutex<T>>
where
    S: Symbol,
    T: Controllable<S>,
{
    fn capability(&self, symbol: &S) -> Option<Capability> {
        let method = T::methods()
            .into_iter()
            .find(|(candidate, _)| candidate == symbol)
            .map(|(_, method)| method)?;

        let target = Arc::clone(self);
        Some(Arc::new(move || {
            let mut entity = target.lock().unwrap_or_else(|poisoned| {
                tracing::warn!("Recovering entity from a panicked capability");
                target.clear_poison();
                PoisonError::into_inner(poisoned)
            });
            method(&mut *entity)
        }))
    }
}
