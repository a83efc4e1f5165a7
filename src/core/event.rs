//! Events accepted by the dispensing device.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every event the device dispatches to its active state.
///
/// `Settle` is internal: it is fired by the device immediately after each
/// `Trigger` and is never issued by a host.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Event {
    Deposit,
    WithdrawRequest,
    Trigger,
    Settle,
}

impl Event {
    /// Snake-case label used in log fields and `Display`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::WithdrawRequest => "withdraw_request",
            Self::Trigger => "trigger",
            Self::Settle => "settle",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host-issued events.
///
/// This is what an event producer hands to [`Device::handle`](crate::Device::handle).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Command {
    Deposit,
    WithdrawRequest,
    Trigger,
}

impl From<Command> for Event {
    fn from(command: Command) -> Self {
        match command {
            Command::Deposit => Event::Deposit,
            Command::WithdrawRequest => Event::WithdrawRequest,
            Command::Trigger => Event::Trigger,
        }
    }
}
