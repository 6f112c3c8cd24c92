//! Builder API for ergonomic engine construction.
//!
//! This module provides a fluent builder, a macro for enum symbols, and
//! shortcuts for the common string-named setup.

pub mod engine;
pub mod error;
pub mod macros;

pub use engine::EngineBuilder;
pub use error::BuildError;

use crate::core::ActionName;
use crate::engine::ActionEngine;
use crate::registry::Target;

/// Convert plain names into action symbols, preserving order.
///
/// # Example
///
/// ```
/// use mimicry::builder::action_names;
/// use mimicry::core::ActionName;
///
/// let names = action_names(&["LEFT", "RIGHT"]);
/// assert_eq!(names, vec![ActionName::new("LEFT"), ActionName::new("RIGHT")]);
/// ```
pub fn action_names(names: &[&str]) -> Vec<ActionName> {
    names.iter().copied().map(ActionName::from).collect()
}

/// Create an OS-seeded engine over string-named actions.
///
/// # Example
///
/// ```
/// use mimicry::builder::mimic;
/// use mimicry::core::ActionName;
/// use mimicry::registry::CapabilitySet;
///
/// let target = CapabilitySet::new()
///     .bind(ActionName::new("UP"), || Ok(()))
///     .bind(ActionName::new("LEFT"), || Ok(()));
///
/// let engine = mimic(&target, &["UP", "DOWN", "LEFT"]);
/// assert_eq!(engine.registry().len(), 2);
/// ```
pub fn mimic<T>(target: &T, names: &[&str]) -> ActionEngine<ActionName>
where
    T: Target<ActionName> + ?Sized,
{
    ActionEngine::new(target, &action_names(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use crate::registry::CapabilitySet;

    #[test]
    fn action_names_preserves_order_and_duplicates() {
        let names = action_names(&["B", "A", "B"]);
        let spelled: Vec<&str> = names.iter().map(|n| n.name()).collect();
        assert_eq!(spelled, vec!["B", "A", "B"]);
    }

    #[test]
    fn mimic_binds_available_actions() {
        let target = CapabilitySet::new().bind(ActionName::new("UP"), || Ok(()));

        let mut engine = mimic(&target, &["UP", "DOWN"]);

        assert_eq!(engine.registry().symbols(), action_names(&["UP"]).as_slice());
        assert!(engine.step().symbol().is_none());
    }
}
