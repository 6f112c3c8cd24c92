//! Engine that trains on player input and replays it through capabilities.

use crate::checkpoint::{Checkpoint, CheckpointError, EngineMetadata};
use crate::core::{FallbackPolicy, RandomSampler, Sampler, Symbol, TransitionModel};
use crate::engine::StepResult;
use crate::registry::{ActionRegistry, Dispatch, Target};

/// Trained-opponent engine.
///
/// Owns the transition model, the capability registry and two cursors:
/// the training cursor (context for the next observation) and the play
/// cursor (the symbol the next step acts on). Both start at `NONE`.
///
/// All operations take `&mut self` and complete synchronously; share the
/// engine across threads only behind a caller-owned lock.
///
/// # Example
///
/// ```rust
/// use mimicry::core::{ActionName, FixedIndex};
/// use mimicry::engine::ActionEngine;
/// use mimicry::registry::CapabilitySet;
///
/// let target = CapabilitySet::new()
///     .bind(ActionName::new("LEFT"), || Ok(()))
///     .bind(ActionName::new("RIGHT"), || Ok(()));
/// let desired = vec![ActionName::new("LEFT"), ActionName::new("RIGHT")];
///
/// let mut engine = ActionEngine::with_sampler(&target, &desired, FixedIndex(0));
/// assert!(engine.step().symbol().is_none()); // untrained
///
/// engine.train(ActionName::new("LEFT"));
/// engine.train(ActionName::new("RIGHT"));
///
/// engine.step(); // NONE -> LEFT
/// let result = engine.step();
/// assert_eq!(result.symbol(), Some(&ActionName::new("LEFT")));
/// assert!(result.is_dispatched());
/// ```
pub struct ActionEngine<S: Symbol, R: Sampler = RandomSampler> {
    model: TransitionModel<S>,
    registry: ActionRegistry<S>,
    sampler: R,
    training_cursor: S,
    play_cursor: S,
    trained: bool,
    metadata: EngineMetadata,
}

impl<S: Symbol> ActionEngine<S, RandomSampler> {
    /// Create an engine sampling from operating-system entropy.
    pub fn new<T>(target: &T, desired: &[S]) -> Self
    where
        T: Target<S> + ?Sized,
    {
        Self::with_sampler(target, desired, RandomSampler::from_os_rng())
    }
}

impl<S: Symbol, R: Sampler> ActionEngine<S, R> {
    /// Create an engine with an explicit source of randomness.
    pub fn with_sampler<T>(target: &T, desired: &[S], sampler: R) -> Self
    where
        T: Target<S> + ?Sized,
    {
        Self::from_parts(
            TransitionModel::new(),
            ActionRegistry::resolve(target, desired),
            sampler,
        )
    }

    pub(crate) fn from_parts(
        model: TransitionModel<S>,
        registry: ActionRegistry<S>,
        sampler: R,
    ) -> Self {
        tracing::debug!(
            "Engine created with {} bound capabilities ({:?} fallback)",
            registry.len(),
            model.fallback()
        );
        Self {
            model,
            registry,
            sampler,
            training_cursor: S::none(),
            play_cursor: S::none(),
            trained: false,
            metadata: EngineMetadata::default(),
        }
    }

    /// Rebuild an engine from a checkpoint, re-resolving capabilities
    /// against `target`. The model keeps the checkpoint's fallback policy.
    pub fn resume<T>(
        checkpoint: Checkpoint<S>,
        target: &T,
        desired: &[S],
        sampler: R,
    ) -> Result<Self, CheckpointError>
    where
        T: Target<S> + ?Sized,
    {
        Self::resume_with_fallback(checkpoint, target, desired, sampler, None)
    }

    /// Resume with `fallback` overriding the checkpoint's policy when set.
    pub(crate) fn resume_with_fallback<T>(
        checkpoint: Checkpoint<S>,
        target: &T,
        desired: &[S],
        sampler: R,
        fallback: Option<FallbackPolicy>,
    ) -> Result<Self, CheckpointError>
    where
        T: Target<S> + ?Sized,
    {
        checkpoint.ensure_valid()?;
        tracing::info!(
            "Resuming checkpoint {} ({} records, {} observations)",
            checkpoint.id,
            checkpoint.records.len(),
            checkpoint.observation_count()
        );

        let Checkpoint {
            records,
            fallback: stored,
            training_cursor,
            play_cursor,
            trained,
            metadata,
            ..
        } = checkpoint;

        let mut engine = Self::from_parts(
            TransitionModel::from_records(records, fallback.unwrap_or(stored)),
            ActionRegistry::resolve(target, desired),
            sampler,
        );
        engine.training_cursor = training_cursor;
        engine.play_cursor = play_cursor;
        engine.trained = trained;
        engine.metadata = metadata;
        Ok(engine)
    }

    /// Record one observed player action.
    ///
    /// The action is appended to the successors of the training cursor,
    /// and then becomes the training cursor itself.
    pub fn train(&mut self, symbol: S) {
        self.trained = true;
        self.model.observe(&self.training_cursor, symbol.clone());
        self.training_cursor = symbol;
        self.metadata.observations += 1;
        self.metadata.touch();
    }

    /// Act on the play cursor, then advance it.
    ///
    /// Untrained engines do nothing. A `NONE` cursor is never dispatched;
    /// an unbound symbol is skipped; a failing capability is reported in
    /// the result and logged. In every trained case the cursor advances.
    pub fn step(&mut self) -> StepResult<S> {
        if !self.trained {
            return StepResult::Untrained;
        }

        let current = self.play_cursor.clone();
        let dispatch = if current.is_none() {
            None
        } else {
            Some(self.registry.dispatch(&current))
        };

        let next = self.advance();
        self.metadata.steps += 1;
        self.metadata.touch();

        match dispatch {
            None => StepResult::Idle { next },
            Some(Dispatch::Invoked) => {
                tracing::debug!("Dispatched {} (next: {})", current.name(), next.name());
                self.metadata.dispatches += 1;
                StepResult::Dispatched {
                    symbol: current,
                    next,
                }
            }
            Some(Dispatch::Unbound) => {
                tracing::trace!("No capability bound for {}, skipping", current.name());
                self.metadata.unbound += 1;
                StepResult::Unbound {
                    symbol: current,
                    next,
                }
            }
            Some(Dispatch::Failed(error)) => {
                tracing::warn!("Dispatch failed, continuing: {}", error);
                self.metadata.failures += 1;
                StepResult::Failed {
                    symbol: current,
                    next,
                    error,
                }
            }
        }
    }

    /// Advance the play cursor without dispatching anything.
    ///
    /// Returns the symbol the cursor stood on, which is what `step` would
    /// have acted on, or `NONE` when the cursor lands back on `NONE`.
    /// Repeated calls walk the chain.
    pub fn peek_next_symbol(&mut self) -> S {
        let current = self.play_cursor.clone();
        if self.advance().is_none() {
            return S::none();
        }
        current
    }

    /// Snapshot the learned state.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint::capture(
            self.model.records().to_vec(),
            self.model.fallback(),
            self.training_cursor.clone(),
            self.play_cursor.clone(),
            self.trained,
            self.metadata.clone(),
        )
    }

    pub fn model(&self) -> &TransitionModel<S> {
        &self.model
    }

    pub fn registry(&self) -> &ActionRegistry<S> {
        &self.registry
    }

    pub fn training_cursor(&self) -> &S {
        &self.training_cursor
    }

    pub fn play_cursor(&self) -> &S {
        &self.play_cursor
    }

    pub fn is_trained(&self) -> bool {
        self.trained
    }

    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    fn advance(&mut self) -> S {
        let next = self
            .model
            .sample_next(&self.play_cursor, &mut self.sampler)
            .expect("transition model is always seeded with the NONE record");
        tracing::trace!("Play cursor {} -> {}", self.play_cursor.name(), next.name());
        self.play_cursor = next.clone();
        next
    }
}
