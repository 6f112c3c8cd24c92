//! Engine configuration.
//!
//! Configuration covers the knobs a host application may want to set
//! without touching code: the sampling seed, the fallback policy and the
//! step cadence.

use crate::core::FallbackPolicy;
use crate::engine::Cadence;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("step_interval must be at least 1")]
    ZeroStepInterval,
}

/// Configuration for an [`ActionEngine`](crate::engine::ActionEngine).
///
/// # Example
///
/// ```rust
/// use mimicry::config::EngineConfig;
/// use mimicry::core::FallbackPolicy;
///
/// let config = EngineConfig::from_json(r#"{ "seed": 42, "fallback": "exclude_none" }"#).unwrap();
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.fallback, FallbackPolicy::ExcludeNone);
/// assert_eq!(config.step_interval, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the random sampler.
    ///
    /// `None` seeds from operating-system entropy.
    ///
    /// Default: None
    #[serde(default)]
    pub seed: Option<u64>,

    /// Where sampling goes when a symbol has no observed successors.
    ///
    /// Default: all known symbols, `NONE` included
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// Driving-loop ticks between engine steps.
    ///
    /// Default: 10
    #[serde(default = "default_step_interval")]
    pub step_interval: u32,
}

fn default_step_interval() -> u32 {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fallback: FallbackPolicy::default(),
            step_interval: default_step_interval(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_interval == 0 {
            return Err(ConfigError::ZeroStepInterval);
        }
        Ok(())
    }

    /// Cadence matching `step_interval`.
    pub fn cadence(&self) -> Cadence {
        Cadence::new(self.step_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.fallback, FallbackPolicy::AllSymbols);
        assert_eq!(config.step_interval, 10);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let result = EngineConfig::from_json(r#"{ "step_interval": 0 }"#);
        assert_eq!(result, Err(ConfigError::ZeroStepInterval));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = EngineConfig::from_json(r#"{ "fallback": "sometimes" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn cadence_follows_interval() {
        let config = EngineConfig {
            step_interval: 2,
            ..EngineConfig::default()
        };
        let mut cadence = config.cadence();
        assert!(!cadence.tick());
        assert!(cadence.tick());
    }

    #[test]
    fn config_serializes_with_snake_case_policy() {
        let config = EngineConfig {
            fallback: FallbackPolicy::ExcludeNone,
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"exclude_none\""));
    }
}
