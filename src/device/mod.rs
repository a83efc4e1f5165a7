//! The dispensing device shell.
//!
//! A [`Device`] owns the resource counter and the active [`DeviceState`].
//! Every event is handed to the pure [`transition::step`] table together
//! with the counter, and the resulting [`Outcome`] is applied here. The
//! device performs no locking: hosts serialize events themselves.

mod builder;
pub mod transition;

pub use builder::DeviceBuilder;
pub use transition::{Accepted, Outcome};

use crate::core::{
    Command, DeviceState, Event, State, StateHistory, StateTransition, DEFAULT_HISTORY_CAPACITY,
};
use crate::narration::{Narrator, TracingNarrator};
use crate::random::{RandomSource, SeededRandom};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// A resource-dispensing device driven by its operating state.
///
/// # Example
///
/// ```rust
/// use dispenser::{Device, DeviceState, FixedOutcome, RecordingNarrator};
///
/// let mut device = Device::new(5, FixedOutcome(false), RecordingNarrator::new());
/// device.deposit();
/// device.trigger();
///
/// assert_eq!(device.resource_count(), 4);
/// assert_eq!(device.state(), DeviceState::AwaitingPayment);
/// assert_eq!(device.narrator().lines().len(), 3);
/// ```
#[derive(Debug)]
pub struct Device<R = SeededRandom, N = TracingNarrator> {
    id: Uuid,
    resource_count: u32,
    state: DeviceState,
    random: R,
    narrator: N,
    history: StateHistory<DeviceState>,
}

impl<R: RandomSource, N: Narrator> Device<R, N> {
    /// Create a device holding `initial_count` units.
    ///
    /// Starts in `AwaitingPayment`, or in `Depleted` when the count is zero.
    /// The history keeps the last [`DEFAULT_HISTORY_CAPACITY`] transitions.
    pub fn new(initial_count: u32, random: R, narrator: N) -> Self {
        Self::from_parts(
            Uuid::new_v4(),
            initial_count,
            random,
            narrator,
            DEFAULT_HISTORY_CAPACITY,
        )
    }

    pub(crate) fn from_parts(
        id: Uuid,
        initial_count: u32,
        random: R,
        narrator: N,
        history_capacity: usize,
    ) -> Self {
        let state = DeviceState::initial(initial_count);
        debug!(device_id = %id, initial_count, state = %state, "device created");
        Self {
            id,
            resource_count: initial_count,
            state,
            random,
            narrator,
            history: StateHistory::bounded(history_capacity),
        }
    }

    /// Insert a payment.
    pub fn deposit(&mut self) {
        self.dispatch(Event::Deposit);
    }

    /// Ask for the payment back.
    pub fn withdraw_request(&mut self) {
        self.dispatch(Event::WithdrawRequest);
    }

    /// Pull the trigger, then settle whatever state that left the device in.
    ///
    /// The trigger only arms the device; units are released by the settle
    /// step, which runs exactly once per trigger even if the trigger itself
    /// was refused.
    pub fn trigger(&mut self) {
        self.dispatch(Event::Trigger);
        self.settle();
    }

    pub(crate) fn settle(&mut self) {
        self.dispatch(Event::Settle);
    }

    /// Dispatch a host command.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Deposit => self.deposit(),
            Command::WithdrawRequest => self.withdraw_request(),
            Command::Trigger => self.trigger(),
        }
    }

    fn dispatch(&mut self, event: Event) {
        let from = self.state;
        let outcome = transition::step(from, event, self.resource_count, &mut self.random);

        match &outcome {
            Outcome::Accepted(accepted) => {
                debug!(
                    device_id = %self.id,
                    event = %event,
                    from = %from,
                    to = %accepted.to,
                    released = accepted.released,
                    remaining = accepted.remaining,
                    "transition accepted"
                );
                self.state = accepted.to;
                self.resource_count = accepted.remaining;
                self.history.push(StateTransition {
                    from,
                    to: accepted.to,
                    event,
                    remaining: accepted.remaining,
                    timestamp: Utc::now(),
                });
            }
            Outcome::Rejected(err) => {
                debug!(
                    device_id = %self.id,
                    event = %event,
                    state = %err.state,
                    reason = err.reason,
                    "event rejected"
                );
            }
        }

        self.narrator.narrate(outcome.narration());
    }
}

impl<R, N> Device<R, N> {
    /// Identifier attached to every log line of this device.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Units left to dispense.
    pub fn resource_count(&self) -> u32 {
        self.resource_count
    }

    /// The active operating state.
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Whether the device reached its terminal `Depleted` state.
    pub fn is_depleted(&self) -> bool {
        self.state.is_final()
    }

    /// Most recent accepted transitions, oldest first.
    pub fn history(&self) -> &StateHistory<DeviceState> {
        &self.history
    }

    /// The narration sink, e.g. to read back a [`RecordingNarrator`](crate::RecordingNarrator).
    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    /// The injected bonus-draw source.
    pub fn random(&self) -> &R {
        &self.random
    }
}
