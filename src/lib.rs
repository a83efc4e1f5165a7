//! Dispenser: a resource-dispensing device driven by its operating state
//!
//! The device is split along a "pure core, imperative shell" line. The
//! transition table is a pure function of `(state, event, remaining)`;
//! the [`Device`] shell holds the counter and the active state, applies
//! outcomes and hands narration to an injected sink.
//!
//! # Core Concepts
//!
//! - **State**: `DeviceState`, one of five mutually exclusive modes
//! - **Events**: deposit, withdraw request and trigger, each trigger
//!   followed by an internal settle step that releases units
//! - **Collaborators**: a [`RandomSource`] for the bonus draw and a
//!   [`Narrator`] for the human-readable log
//! - **History**: immutable record of accepted transitions
//!
//! Illegal events are never errors to the caller. They are narrated and
//! leave the device unchanged.
//!
//! # Example
//!
//! ```rust
//! use dispenser::{Device, DeviceState, ScriptedOutcomes, RecordingNarrator};
//!
//! let mut device = Device::new(5, ScriptedOutcomes::new([true]), RecordingNarrator::new());
//!
//! device.deposit();
//! device.trigger();
//!
//! assert_eq!(device.resource_count(), 3);
//! assert_eq!(device.state(), DeviceState::AwaitingPayment);
//! assert_eq!(
//!     device.narrator().last(),
//!     Some("YOU'RE A WINNER! You got two units for your payment")
//! );
//! ```

mod macros;

pub mod config;
pub mod core;
pub mod device;
pub mod error;
pub mod narration;
pub mod random;

// Re-export commonly used types
pub use crate::config::DeviceConfig;
pub use crate::core::{Command, DeviceState, Event, State, StateHistory, StateTransition};
pub use crate::device::{Device, DeviceBuilder, Outcome};
pub use crate::error::{BuildError, ConfigError, ConfigViolation, IllegalInState};
pub use crate::narration::{Narrator, RecordingNarrator, Silent, TracingNarrator};
pub use crate::random::{FixedOutcome, RandomSource, ScriptedOutcomes, SeededRandom};
