//! Builder and configuration entry points for devices.

use super::Device;
use crate::config::DeviceConfig;
use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::error::{BuildError, ConfigError};
use crate::narration::{Narrator, TracingNarrator};
use crate::random::{RandomSource, SeededRandom};
use uuid::Uuid;

/// Builder for constructing devices with a fluent API.
///
/// # Example
///
/// ```rust
/// use dispenser::{DeviceBuilder, DeviceState, FixedOutcome, Silent};
///
/// let device = DeviceBuilder::new()
///     .initial_count(2)
///     .random(FixedOutcome(true))
///     .narrator(Silent)
///     .build()
///     .unwrap();
///
/// assert_eq!(device.state(), DeviceState::AwaitingPayment);
/// ```
pub struct DeviceBuilder<R = SeededRandom, N = TracingNarrator> {
    initial_count: Option<u32>,
    random: R,
    narrator: N,
    history_capacity: usize,
}

impl DeviceBuilder {
    /// Create a builder using an entropy-seeded random source and tracing narration.
    pub fn new() -> Self {
        Self {
            initial_count: None,
            random: SeededRandom::default(),
            narrator: TracingNarrator::new(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource, N: Narrator> DeviceBuilder<R, N> {
    /// Set the number of units loaded (required).
    pub fn initial_count(mut self, count: u32) -> Self {
        self.initial_count = Some(count);
        self
    }

    /// Replace the bonus-draw source.
    pub fn random<R2: RandomSource>(self, random: R2) -> DeviceBuilder<R2, N> {
        DeviceBuilder {
            initial_count: self.initial_count,
            random,
            narrator: self.narrator,
            history_capacity: self.history_capacity,
        }
    }

    /// Replace the narration sink.
    pub fn narrator<N2: Narrator>(self, narrator: N2) -> DeviceBuilder<R, N2> {
        DeviceBuilder {
            initial_count: self.initial_count,
            random: self.random,
            narrator,
            history_capacity: self.history_capacity,
        }
    }

    /// Number of transitions the history keeps; zero disables recording.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Build the device.
    pub fn build(self) -> Result<Device<R, N>, BuildError> {
        let initial_count = self.initial_count.ok_or(BuildError::MissingInitialCount)?;
        Ok(Device::from_parts(
            Uuid::new_v4(),
            initial_count,
            self.random,
            self.narrator,
            self.history_capacity,
        ))
    }
}

impl Device<SeededRandom, TracingNarrator> {
    /// Build a device from a validated configuration.
    pub fn from_config(config: &DeviceConfig) -> Result<Self, ConfigError> {
        config.check()?;

        let id = Uuid::new_v4();
        let random = match config.seed {
            Some(seed) => SeededRandom::from_seed(seed, config.bonus_probability),
            None => SeededRandom::from_entropy(config.bonus_probability),
        };

        Ok(Self::from_parts(
            id,
            config.initial_count,
            random,
            TracingNarrator::for_device(id),
            config.history_capacity,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeviceState;
    use crate::narration::RecordingNarrator;
    use crate::random::FixedOutcome;

    #[test]
    fn builder_requires_initial_count() {
        let result = DeviceBuilder::new().narrator(RecordingNarrator::new()).build();
        assert_eq!(result.err(), Some(BuildError::MissingInitialCount));
    }

    #[test]
    fn builder_wires_collaborators() {
        let mut device = DeviceBuilder::new()
            .initial_count(5)
            .random(FixedOutcome(true))
            .narrator(RecordingNarrator::new())
            .build()
            .unwrap();

        device.deposit();
        device.trigger();

        assert_eq!(device.resource_count(), 3);
        assert_eq!(device.narrator().lines().len(), 3);
    }

    #[test]
    fn builder_can_disable_history() {
        let mut device = DeviceBuilder::new()
            .initial_count(5)
            .random(FixedOutcome(false))
            .narrator(RecordingNarrator::new())
            .history_capacity(0)
            .build()
            .unwrap();

        device.deposit();
        assert!(device.history().is_empty());
    }

    #[test]
    fn from_config_honours_count_and_probability() {
        let config = DeviceConfig {
            bonus_probability: 1.0,
            seed: Some(11),
            ..DeviceConfig::new(4)
        };
        let mut device = Device::from_config(&config).unwrap();

        assert_eq!(device.random().probability(), 1.0);
        device.deposit();
        device.trigger();

        assert_eq!(device.resource_count(), 2);
        assert_eq!(device.state(), DeviceState::AwaitingPayment);
    }

    #[test]
    fn from_config_rejects_invalid_probability() {
        let config = DeviceConfig {
            bonus_probability: -0.1,
            ..DeviceConfig::new(4)
        };
        assert!(matches!(Device::from_config(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn from_config_with_zero_count_is_depleted() {
        let device = Device::from_config(&DeviceConfig::new(0)).unwrap();
        assert!(device.is_depleted());
    }
}
