//! Solver configuration with YAML schema and validation.
//!
//! All tunables are explicit values handed to the solver; there is no
//! module-level state. Schema-level constraints live in `validator`
//! attributes, anything the schema cannot express (exclusive ranges) in
//! `validate_semantic`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{AcoError, AcoResult};

/// Ant colony parameters.
///
/// Defaults match the reference tuning: 20 ants, 100 iterations,
/// 10% evaporation, `alpha = 1`, `beta = 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ColonyConfig {
    /// Number of ants per iteration.
    #[validate(range(min = 1))]
    #[serde(default = "default_n_ants")]
    pub n_ants: usize,

    /// Number of iterations; the loop always runs this exact count.
    #[validate(range(min = 1))]
    #[serde(default = "default_n_iterations")]
    pub n_iterations: usize,

    /// Pheromone evaporation rate per iteration, in (0, 1).
    #[serde(default = "default_decay")]
    pub decay: f64,

    /// Pheromone influence exponent.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Heuristic (inverse distance) influence exponent.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_beta")]
    pub beta: f64,

    /// Master RNG seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_n_ants() -> usize {
    20
}

const fn default_n_iterations() -> usize {
    100
}

const fn default_decay() -> f64 {
    0.1
}

const fn default_alpha() -> f64 {
    1.0
}

const fn default_beta() -> f64 {
    2.0
}

const fn default_seed() -> u64 {
    42
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            n_ants: default_n_ants(),
            n_iterations: default_n_iterations(),
            decay: default_decay(),
            alpha: default_alpha(),
            beta: default_beta(),
            seed: default_seed(),
        }
    }
}

impl ColonyConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> AcoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> AcoResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> ColonyConfigBuilder {
        ColonyConfigBuilder::default()
    }

    /// Run schema validation plus semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns error if any parameter is out of range.
    pub fn validate_all(&self) -> AcoResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> AcoResult<()> {
        // Exclusive bounds: decay 0 never forgets, decay 1 erases memory.
        if self.decay <= 0.0 || self.decay >= 1.0 {
            return Err(AcoError::config(format!(
                "decay must be strictly between 0 and 1, got {}",
                self.decay
            )));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(AcoError::config("alpha and beta must be finite"));
        }
        Ok(())
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct ColonyConfigBuilder {
    n_ants: Option<usize>,
    n_iterations: Option<usize>,
    decay: Option<f64>,
    alpha: Option<f64>,
    beta: Option<f64>,
    seed: Option<u64>,
}

impl ColonyConfigBuilder {
    /// Set the number of ants per iteration.
    #[must_use]
    pub const fn n_ants(mut self, n_ants: usize) -> Self {
        self.n_ants = Some(n_ants);
        self
    }

    /// Set the iteration count.
    #[must_use]
    pub const fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.n_iterations = Some(n_iterations);
        self
    }

    /// Set the evaporation rate.
    #[must_use]
    pub const fn decay(mut self, decay: f64) -> Self {
        self.decay = Some(decay);
        self
    }

    /// Set the pheromone influence exponent.
    #[must_use]
    pub const fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Set the heuristic influence exponent.
    #[must_use]
    pub const fn beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Set the master RNG seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configuration, falling back to defaults for unset fields.
    #[must_use]
    pub fn build(self) -> ColonyConfig {
        let defaults = ColonyConfig::default();
        ColonyConfig {
            n_ants: self.n_ants.unwrap_or(defaults.n_ants),
            n_iterations: self.n_iterations.unwrap_or(defaults.n_iterations),
            decay: self.decay.unwrap_or(defaults.decay),
            alpha: self.alpha.unwrap_or(defaults.alpha),
            beta: self.beta.unwrap_or(defaults.beta),
            seed: self.seed.unwrap_or(defaults.seed),
        }
    }
}
