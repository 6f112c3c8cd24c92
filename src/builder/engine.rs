//! Builder for constructing action engines.

use crate::builder::error::BuildError;
use crate::checkpoint::Checkpoint;
use crate::config::{ConfigError, EngineConfig};
use crate::core::{FallbackPolicy, RandomSampler, Sampler, Symbol, TransitionModel};
use crate::engine::ActionEngine;
use crate::registry::{ActionRegistry, Target};

/// Builder for constructing engines with a fluent API.
pub struct EngineBuilder<S: Symbol, R: Sampler = RandomSampler> {
    actions: Vec<S>,
    fallback: Option<FallbackPolicy>,
    sampler: R,
    checkpoint: Option<Checkpoint<S>>,
    config_error: Option<ConfigError>,
}

impl<S: Symbol> EngineBuilder<S, RandomSampler> {
    /// Create a new builder sampling from operating-system entropy.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            fallback: None,
            sampler: RandomSampler::from_os_rng(),
            checkpoint: None,
            config_error: None,
        }
    }

    /// Seed the random sampler for a reproducible session.
    pub fn seed(mut self, seed: u64) -> Self {
        self.sampler = RandomSampler::seeded(seed);
        self
    }

    /// Apply a configuration. Validation errors surface from `build()`.
    pub fn config(mut self, config: EngineConfig) -> Self {
        if let Err(e) = config.validate() {
            self.config_error = Some(e);
        }
        self.fallback = Some(config.fallback);
        if let Some(seed) = config.seed {
            self.sampler = RandomSampler::seeded(seed);
        }
        self
    }
}

impl<S: Symbol, R: Sampler> EngineBuilder<S, R> {
    /// Request one action symbol.
    pub fn action(mut self, symbol: S) -> Self {
        self.actions.push(symbol);
        self
    }

    /// Request several action symbols, in order.
    pub fn actions(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.actions.extend(symbols);
        self
    }

    /// Set the fallback policy. When resuming, this overrides the policy
    /// stored in the checkpoint.
    pub fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = Some(policy);
        self
    }

    /// Replace the source of randomness.
    pub fn with_sampler<R2: Sampler>(self, sampler: R2) -> EngineBuilder<S, R2> {
        EngineBuilder {
            actions: self.actions,
            fallback: self.fallback,
            sampler,
            checkpoint: self.checkpoint,
            config_error: self.config_error,
        }
    }

    /// Start from a checkpoint instead of an empty model.
    pub fn resume(mut self, checkpoint: Checkpoint<S>) -> Self {
        self.checkpoint = Some(checkpoint);
        self
    }

    /// Build the engine, resolving the requested actions against `target`.
    /// Returns an error if required fields are missing or invalid.
    pub fn build<T>(self, target: &T) -> Result<ActionEngine<S, R>, BuildError>
    where
        T: Target<S> + ?Sized,
    {
        if let Some(e) = self.config_error {
            return Err(BuildError::InvalidConfig(e));
        }

        if self.actions.is_empty() {
            return Err(BuildError::NoActions);
        }

        match self.checkpoint {
            Some(checkpoint) => Ok(ActionEngine::resume_with_fallback(
                checkpoint,
                target,
                &self.actions,
                self.sampler,
                self.fallback,
            )?),
            None => Ok(ActionEngine::from_parts(
                TransitionModel::with_fallback(self.fallback.unwrap_or_default()),
                ActionRegistry::resolve(target, &self.actions),
                self.sampler,
            )),
        }
    }
}

impl<S: Symbol> Default for EngineBuilder<S, RandomSampler> {
    fn default() -> Self {
        Self::new()
    }
}
