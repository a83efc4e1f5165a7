//! Core vocabulary of the dispensing device.
//!
//! - State definitions via the `State` trait and the `DeviceState` enum
//! - The events a device reacts to
//! - Bounded history tracking
//!
//! Nothing in this module performs side effects.

mod event;
mod history;
mod state;

pub use event::{Command, Event};
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_CAPACITY};
pub use state::{DeviceState, State};
