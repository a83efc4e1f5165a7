//! Device configuration.
//!
//! Validation accumulates every broken rule instead of stopping at the
//! first one, so a bad configuration is reported in a single pass.

use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::error::{ConfigError, ConfigViolation};
use crate::random::DEFAULT_BONUS_PROBABILITY;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Settings for building a [`Device`](crate::Device).
///
/// # Example
///
/// ```rust
/// use dispenser::DeviceConfig;
///
/// let config = DeviceConfig::from_json(r#"{ "initial_count": 5, "seed": 7 }"#).unwrap();
/// assert_eq!(config.initial_count, 5);
/// assert_eq!(config.bonus_probability, 0.5);
/// assert_eq!(config.history_capacity, 1024);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// Units loaded at construction
    pub initial_count: u32,

    /// Chance that an accepted trigger earns a bonus round
    #[serde(default = "default_bonus_probability")]
    pub bonus_probability: f64,

    /// Seed for reproducible bonus draws; entropy is used when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Most recent transitions kept in the device history; zero disables it
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_bonus_probability() -> f64 {
    DEFAULT_BONUS_PROBABILITY
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl DeviceConfig {
    pub fn new(initial_count: u32) -> Self {
        Self {
            initial_count,
            bonus_probability: DEFAULT_BONUS_PROBABILITY,
            seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let probability = self.bonus_probability;
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            if probability.is_finite() {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::NonFiniteProbability(probability))
            },
            if (0.0..=1.0).contains(&probability) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::ProbabilityOutOfRange(probability))
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}
