//! Per-symbol observation history.

use super::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// Observations of what directly followed one symbol during training.
///
/// `observed_next` is append-only and keeps duplicates: frequency is encoded
/// by repetition, so a successor seen three times is three times as likely to
/// be sampled as one seen once.
///
/// # Example
///
/// ```rust
/// use mimicry::core::{ActionName, TransitionModel};
///
/// let mut model = TransitionModel::new();
/// let left = ActionName::new("LEFT");
/// let right = ActionName::new("RIGHT");
///
/// model.observe(&left, right.clone());
/// model.observe(&left, right.clone());
/// model.observe(&left, left.clone());
///
/// let record = model.record(&left).unwrap();
/// assert_eq!(record.observed_next().len(), 3);
/// assert_eq!(record.weight_of(&right), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: Symbol> {
    symbol: S,
    observed_next: Vec<S>,
}

impl<S: Symbol> TransitionRecord<S> {
    /// Create a record with no observations.
    pub fn new(symbol: S) -> Self {
        Self {
            symbol,
            observed_next: Vec::new(),
        }
    }

    /// The symbol this record describes.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    /// Successors in the order they were observed.
    pub fn observed_next(&self) -> &[S] {
        &self.observed_next
    }

    /// Whether any successor has been observed.
    pub fn has_observations(&self) -> bool {
        !self.observed_next.is_empty()
    }

    /// Number of times `next` was seen directly after this symbol.
    pub fn weight_of(&self, next: &S) -> usize {
        self.observed_next.iter().filter(|s| *s == next).count()
    }

    /// Distinct successors with their counts, in first-seen order.
    pub fn distribution(&self) -> Vec<(&S, usize)> {
        let mut counts: Vec<(&S, usize)> = Vec::new();
        for next in &self.observed_next {
            match counts.iter_mut().find(|(s, _)| *s == next) {
                Some((_, count)) => *count += 1,
                None => counts.push((next, 1)),
            }
        }
        counts
    }

    pub(crate) fn push(&mut self, next: S) {
        self.observed_next.push(next);
    }
}
