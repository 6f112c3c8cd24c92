//! First-order, frequency-weighted transition model.

use super::error::ModelError;
use super::record::TransitionRecord;
use super::sampler::Sampler;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where `sample_next` looks when the current symbol has no observed
/// successors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Any known symbol, `NONE` included.
    #[default]
    AllSymbols,

    /// Any known symbol except `NONE`, unless `NONE` is the only one.
    ExcludeNone,
}

/// Empirical symbol → next-symbol chain built from training observations.
///
/// Records are kept in first-seen order so that a deterministic [`Sampler`]
/// yields reproducible results. The model is always seeded with a `NONE`
/// record and records are never removed.
///
/// # Example
///
/// ```rust
/// use mimicry::core::{ActionName, FixedIndex, Symbol, TransitionModel};
///
/// let mut model = TransitionModel::new();
/// let left = ActionName::new("LEFT");
/// let right = ActionName::new("RIGHT");
///
/// model.observe(&ActionName::none(), left.clone());
/// model.observe(&left, right.clone());
///
/// assert_eq!(model.len(), 3);
/// let next = model.sample_next(&left, &mut FixedIndex(0)).unwrap();
/// assert_eq!(next, right);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionModel<S: Symbol> {
    records: Vec<TransitionRecord<S>>,
    index: HashMap<S, usize>,
    fallback: FallbackPolicy,
}

impl<S: Symbol> Default for TransitionModel<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> TransitionModel<S> {
    /// Create a model holding only the `NONE` record.
    pub fn new() -> Self {
        Self::with_fallback(FallbackPolicy::default())
    }

    /// Create a seeded model with an explicit fallback policy.
    pub fn with_fallback(fallback: FallbackPolicy) -> Self {
        let mut model = Self {
            records: Vec::new(),
            index: HashMap::new(),
            fallback,
        };
        model.ensure_record(&S::none());
        model
    }

    /// Rebuild a model from stored records. Callers validate the records
    /// first; a missing `NONE` record is re-seeded.
    pub(crate) fn from_records(records: Vec<TransitionRecord<S>>, fallback: FallbackPolicy) -> Self {
        let mut model = Self {
            records: Vec::with_capacity(records.len()),
            index: HashMap::with_capacity(records.len()),
            fallback,
        };
        for record in records {
            if model.index.contains_key(record.symbol()) {
                continue;
            }
            model
                .index
                .insert(record.symbol().clone(), model.records.len());
            model.records.push(record);
        }
        model.ensure_record(&S::none());
        model
    }

    /// Record that `next` directly followed `previous`.
    ///
    /// Creates records for either symbol if absent. Repeating the same call
    /// increases the weight of that transition.
    pub fn observe(&mut self, previous: &S, next: S) {
        self.ensure_record(&next);
        let slot = self.ensure_record(previous);
        tracing::trace!("observed {} -> {}", previous.name(), next.name());
        self.records[slot].push(next);
    }

    /// Sample the symbol that should follow `current`.
    ///
    /// Picks uniformly from `current`'s observed successors, so repeated
    /// observations weigh proportionally. With no observed successors
    /// (or no record at all), picks uniformly among the known symbols
    /// according to the fallback policy.
    pub fn sample_next<R: Sampler + ?Sized>(
        &self,
        current: &S,
        sampler: &mut R,
    ) -> Result<S, ModelError> {
        if let Some(record) = self.record(current) {
            let successors = record.observed_next();
            if !successors.is_empty() {
                let pick = sampler.pick(successors.len()).min(successors.len() - 1);
                return Ok(successors[pick].clone());
            }
        }

        let candidates = self.fallback_candidates();
        if candidates.is_empty() {
            return Err(ModelError::EmptyModel);
        }
        let pick = sampler.pick(candidates.len()).min(candidates.len() - 1);
        tracing::trace!(
            "no successors for {}, falling back to {}",
            current.name(),
            candidates[pick].name()
        );
        Ok(candidates[pick].clone())
    }

    /// Get the record for a symbol.
    pub fn record(&self, symbol: &S) -> Option<&TransitionRecord<S>> {
        self.index.get(symbol).map(|&slot| &self.records[slot])
    }

    /// All records in first-seen order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// All known symbols in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = &S> {
        self.records.iter().map(TransitionRecord::symbol)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }

    /// Number of distinct symbols, `NONE` included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of observed transitions.
    pub fn observation_count(&self) -> usize {
        self.records.iter().map(|r| r.observed_next().len()).sum()
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    fn fallback_candidates(&self) -> Vec<&S> {
        let all: Vec<&S> = self.symbols().collect();
        match self.fallback {
            FallbackPolicy::AllSymbols => all,
            FallbackPolicy::ExcludeNone => {
                let named: Vec<&S> = all.iter().copied().filter(|s| !s.is_none()).collect();
                if named.is_empty() {
                    all
                } else {
                    named
                }
            }
        }
    }

    fn ensure_record(&mut self, symbol: &S) -> usize {
        if let Some(&slot) = self.index.get(symbol) {
            return slot;
        }
        let slot = self.records.len();
        self.records.push(TransitionRecord::new(symbol.clone()));
        self.index.insert(symbol.clone(), slot);
        slot
    }
}
