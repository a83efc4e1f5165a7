//! State trait and the operating states of the dispensing device.
//!
//! All state machine states implement [`State`], which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are immutable values
/// describing the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: transition logic compares states
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: history can be exported for inspection
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Operating state of a dispensing device.
    ///
    /// Exactly one state is active at any time. `Depleted` is terminal:
    /// no device event leads out of it.
    #[derive(Copy, Eq, Hash)]
    pub enum DeviceState {
        /// Idle, waiting for a payment.
        AwaitingPayment,
        /// A payment is held; the trigger may be pulled or the payment returned.
        PaymentReceived,
        /// Armed to release a single unit on settle.
        Dispensing,
        /// Armed to release a unit plus a bonus unit on settle.
        BonusRound,
        /// No units left.
        Depleted,
    }
    final: [Depleted]
}

impl DeviceState {
    /// State a freshly constructed device starts in.
    pub fn initial(resource_count: u32) -> Self {
        if resource_count > 0 {
            Self::AwaitingPayment
        } else {
            Self::Depleted
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
