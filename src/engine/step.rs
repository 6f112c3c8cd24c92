//! Outcome of a single engine step.

use crate::core::Symbol;
use crate::registry::DispatchError;

/// Result of executing a single step
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: Symbol> {
    /// Nothing has been trained yet; no dispatch, cursor unchanged
    Untrained,

    /// The play cursor was on `NONE`; nothing dispatched
    Idle { next: S },

    /// The capability for `symbol` ran successfully
    Dispatched { symbol: S, next: S },

    /// `symbol` has no bound capability and was skipped
    Unbound { symbol: S, next: S },

    /// The capability for `symbol` failed; the cursor still advanced
    Failed {
        symbol: S,
        next: S,
        error: DispatchError,
    },
}

impl<S: Symbol> StepResult<S> {
    /// The symbol this step acted on, if it was not `NONE`.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Self::Dispatched { symbol, .. }
            | Self::Unbound { symbol, .. }
            | Self::Failed { symbol, .. } => Some(symbol),
            Self::Untrained | Self::Idle { .. } => None,
        }
    }

    /// The symbol the play cursor moved to.
    pub fn next(&self) -> Option<&S> {
        match self {
            Self::Idle { next }
            | Self::Dispatched { next, .. }
            | Self::Unbound { next, .. }
            | Self::Failed { next, .. } => Some(next),
            Self::Untrained => None,
        }
    }

    pub fn error(&self) -> Option<&DispatchError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActionName;
    use crate::registry::CapabilityError;

    fn name(s: &str) -> ActionName {
        ActionName::new(s)
    }

    #[test]
    fn untrained_has_no_symbols() {
        let result: StepResult<ActionName> = StepResult::Untrained;
        assert!(result.symbol().is_none());
        assert!(result.next().is_none());
        assert!(result.error().is_none());
        assert!(!result.is_dispatched());
    }

    #[test]
    fn idle_only_reports_next() {
        let result = StepResult::Idle { next: name("UP") };
        assert!(result.symbol().is_none());
        assert_eq!(result.next(), Some(&name("UP")));
    }

    #[test]
    fn failed_reports_symbol_and_error() {
        let error = DispatchError::Failed {
            symbol: "UP".to_string(),
            source: CapabilityError::failed("blocked"),
        };
        let result = StepResult::Failed {
            symbol: name("UP"),
            next: name("DOWN"),
            error: error.clone(),
        };

        assert_eq!(result.symbol(), Some(&name("UP")));
        assert_eq!(result.next(), Some(&name("DOWN")));
        assert_eq!(result.error(), Some(&error));
        assert!(!result.is_dispatched());
    }
}
