//! Error types.

use crate::core::{DeviceState, Event};
use thiserror::Error;

/// An event that is not legal in the device's current state.
///
/// This is the only runtime failure a device knows about. It is never
/// returned to the caller: the state handler absorbs it, narrates the
/// reason and leaves the device untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct IllegalInState {
    pub state: DeviceState,
    pub event: Event,
    pub reason: &'static str,
}

impl IllegalInState {
    pub(crate) fn new(state: DeviceState, event: Event, reason: &'static str) -> Self {
        Self {
            state,
            event,
            reason,
        }
    }
}

/// A single configuration rule that was broken.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("bonus probability must be a finite number (got {0})")]
    NonFiniteProbability(f64),

    #[error("bonus probability must lie within [0, 1] (got {0})")]
    ProbabilityOutOfRange(f64),
}

/// Errors raised while loading or validating a device configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by [`DeviceBuilder`](crate::DeviceBuilder).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial resource count not specified. Call .initial_count(n) before .build()")]
    MissingInitialCount,
}
