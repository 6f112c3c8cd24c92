//! Core Symbol trait for action identifiers.
//!
//! Symbols name the actions a player performs and the mimic replays. The
//! engine never interprets them structurally: equality and hashing are the
//! only operations it relies on.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for action symbols.
///
/// Every symbol type has a distinguished `NONE` value, returned by
/// [`Symbol::none`], that seeds each transition model and is never
/// dispatched to a capability.
///
/// # Required Traits
///
/// - `Clone`: symbols are copied into observation histories
/// - `Eq` + `Hash`: symbols key the model and the registry
/// - `Debug`: symbols must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: symbols are persisted in checkpoints
///
/// # Example
///
/// ```rust
/// use mimicry::core::Symbol;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Move {
///     Idle,
///     Left,
///     Right,
/// }
///
/// impl Symbol for Move {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Left => "Left",
///             Self::Right => "Right",
///         }
///     }
///
///     fn none() -> Self {
///         Self::Idle
///     }
/// }
///
/// assert!(Move::Idle.is_none());
/// assert!(!Move::Left.is_none());
/// ```
pub trait Symbol:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the symbol's name for display/logging.
    fn name(&self) -> &str;

    /// The distinguished "no action" symbol.
    fn none() -> Self;

    /// Check if this is the "no action" symbol.
    fn is_none(&self) -> bool {
        *self == Self::none()
    }
}

/// String-backed symbol, the natural choice when actions arrive as names
/// (key codes, command strings, method-like labels).
///
/// `ActionName::NONE` is spelled `"NONE"`.
///
/// # Example
///
/// ```rust
/// use mimicry::core::{ActionName, Symbol};
///
/// let left = ActionName::new("LEFT");
/// assert_eq!(left.name(), "LEFT");
/// assert!(ActionName::none().is_none());
/// assert_eq!(ActionName::from("LEFT"), left);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionName(String);

impl ActionName {
    /// Spelling of the `NONE` symbol.
    pub const NONE: &'static str = "NONE";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Symbol for ActionName {
    fn name(&self) -> &str {
        &self.0
    }

    fn none() -> Self {
        Self(Self::NONE.to_string())
    }

    fn is_none(&self) -> bool {
        self.0 == Self::NONE
    }
}

impl Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ActionName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ActionName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
