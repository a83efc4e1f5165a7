//! State transition history tracking.
//!
//! Tracks accepted transitions over time, either through the immutable
//! `record` or the in-place `push`. Rejected events never appear here
//! because they leave the state unchanged.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{vec_deque, VecDeque};
use std::time::Duration;

/// Transitions a device keeps unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1024;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use dispenser::core::{DeviceState, Event, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: DeviceState::AwaitingPayment,
///     to: DeviceState::PaymentReceived,
///     event: Event::Deposit,
///     remaining: 5,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, Event::Deposit);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that caused the transition
    pub event: Event,
    /// Resource count after the transition
    pub remaining: u32,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition appended; `push`
/// appends in place. A bounded history evicts its oldest transitions.
///
/// # Example
///
/// ```rust
/// use dispenser::core::{DeviceState, Event, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: DeviceState::AwaitingPayment,
///     to: DeviceState::PaymentReceived,
///     event: Event::Deposit,
///     remaining: 2,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&DeviceState::AwaitingPayment, &DeviceState::PaymentReceived]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(default)]
    capacity: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create a history that keeps at most `capacity` transitions.
    ///
    /// Once full, recording a transition evicts the oldest one. A capacity
    /// of zero keeps nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dispenser::core::{DeviceState, Event, StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let mut history = StateHistory::bounded(1);
    /// for event in [Event::Deposit, Event::WithdrawRequest] {
    ///     history.push(StateTransition {
    ///         from: DeviceState::AwaitingPayment,
    ///         to: DeviceState::PaymentReceived,
    ///         event,
    ///         remaining: 2,
    ///         timestamp: Utc::now(),
    ///     });
    /// }
    ///
    /// assert_eq!(history.len(), 1);
    /// assert_eq!(history.last().map(|t| t.event), Some(Event::WithdrawRequest));
    /// ```
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Maximum number of transitions kept, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, evicting the oldest one when full.
    pub fn push(&mut self, transition: StateTransition<S>) {
        match self.capacity {
            Some(0) => return,
            Some(capacity) => {
                while self.transitions.len() >= capacity {
                    self.transitions.pop_front();
                }
            }
            None => {}
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept transition followed by
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time elapsed between the first and last kept transition.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate over kept transitions, oldest first.
    pub fn transitions(&self) -> vec_deque::Iter<'_, StateTransition<S>> {
        self.transitions.iter()
    }

    /// Transition at `index`, counting from the oldest kept one.
    pub fn get(&self, index: usize) -> Option<&StateTransition<S>> {
        self.transitions.get(index)
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
