//! Pure transition table of the dispensing device.
//!
//! [`step`] maps `(state, event, remaining)` to the next state, the number
//! of units released and the narration line. It owns no data: the device
//! passes its counter in and applies the returned [`Outcome`].

use crate::core::{DeviceState, Event};
use crate::error::IllegalInState;
use crate::random::RandomSource;

const RELEASED: &str = "A unit comes rolling out the slot...";
const RELEASED_LAST: &str = "A unit comes rolling out the slot... Oops, out of units!";
const BONUS: &str = "YOU'RE A WINNER! You got two units for your payment";
const BONUS_LAST: &str =
    "YOU'RE A WINNER! You got two units for your payment... Oops, out of units!";

/// Result of dispatching one event to one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(Accepted),
    Rejected(IllegalInState),
}

/// An accepted event: the state to move to and the resulting counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub to: DeviceState,
    /// Units released by this event.
    pub released: u32,
    /// Resource count after this event.
    pub remaining: u32,
    pub narration: &'static str,
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The narration line for this outcome.
    pub fn narration(&self) -> &'static str {
        match self {
            Self::Accepted(accepted) => accepted.narration,
            Self::Rejected(err) => err.reason,
        }
    }
}

/// Whether a trigger earns a bonus round.
///
/// The last unit can never be part of a bonus round.
pub fn bonus_eligible(draw: bool, remaining: u32) -> bool {
    draw && remaining > 1
}

/// Dispatch `event` to `state`.
///
/// `random` is consulted only when a trigger is accepted from
/// `PaymentReceived`, and then exactly once.
pub fn step<R>(state: DeviceState, event: Event, remaining: u32, random: &mut R) -> Outcome
where
    R: RandomSource + ?Sized,
{
    use DeviceState::*;
    use Event::*;

    let reject = |reason| Outcome::Rejected(IllegalInState::new(state, event, reason));
    let hold = |to, narration| {
        Outcome::Accepted(Accepted {
            to,
            released: 0,
            remaining,
            narration,
        })
    };

    match (state, event) {
        (AwaitingPayment, Deposit) => hold(PaymentReceived, "You inserted a payment"),
        (AwaitingPayment, WithdrawRequest) => reject("You haven't inserted a payment"),
        (AwaitingPayment, Trigger) => reject("You turned, but there's no payment"),
        (AwaitingPayment, Settle) => reject("You need to pay first"),

        (PaymentReceived, Deposit) => reject("You can't insert another payment"),
        (PaymentReceived, WithdrawRequest) => hold(AwaitingPayment, "Payment returned"),
        (PaymentReceived, Trigger) => {
            let draw = random.draw_boolean();
            if bonus_eligible(draw, remaining) {
                hold(BonusRound, "You turned...")
            } else {
                hold(Dispensing, "You turned...")
            }
        }
        (PaymentReceived, Settle) => reject("No unit dispensed"),

        (Dispensing, Deposit) => reject("Please wait, we're already giving you a unit"),
        (Dispensing, WithdrawRequest) => reject("Sorry, you already turned the crank"),
        (Dispensing, Trigger) => reject("Turning twice doesn't get you another unit!"),
        (Dispensing, Settle) => settle_single(remaining),

        (BonusRound, Deposit) => reject("Please wait, we're already giving you your units"),
        (BonusRound, WithdrawRequest) => reject("Sorry, you already turned the crank"),
        (BonusRound, Trigger) => reject("Turning twice doesn't get you another unit!"),
        (BonusRound, Settle) => settle_bonus(remaining),

        (Depleted, Deposit) => reject("You can't insert a payment, the machine is sold out"),
        (Depleted, WithdrawRequest) => {
            reject("You can't get a refund, you haven't inserted a payment")
        }
        (Depleted, Trigger) => reject("You turned, but there are no units"),
        (Depleted, Settle) => reject("No units dispensed"),
    }
}

fn after_release(remaining: u32) -> DeviceState {
    if remaining > 0 {
        DeviceState::AwaitingPayment
    } else {
        DeviceState::Depleted
    }
}

fn settle_single(remaining: u32) -> Outcome {
    let after = remaining.saturating_sub(1);
    let narration = if after > 0 { RELEASED } else { RELEASED_LAST };
    Outcome::Accepted(Accepted {
        to: after_release(after),
        released: remaining - after,
        remaining: after,
        narration,
    })
}

// Release one unit; the bonus unit follows only if that did not empty the device.
fn settle_bonus(remaining: u32) -> Outcome {
    let first = remaining.saturating_sub(1);
    if first == 0 {
        return Outcome::Accepted(Accepted {
            to: DeviceState::Depleted,
            released: remaining,
            remaining: 0,
            narration: RELEASED_LAST,
        });
    }

    let second = first - 1;
    let narration = if second > 0 { BONUS } else { BONUS_LAST };
    Outcome::Accepted(Accepted {
        to: after_release(second),
        released: 2,
        remaining: second,
        narration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedOutcome, ScriptedOutcomes};

    const STATES: [DeviceState; 5] = [
        DeviceState::AwaitingPayment,
        DeviceState::PaymentReceived,
        DeviceState::Dispensing,
        DeviceState::BonusRound,
        DeviceState::Depleted,
    ];

    const EVENTS: [Event; 4] = [
        Event::Deposit,
        Event::WithdrawRequest,
        Event::Trigger,
        Event::Settle,
    ];

    fn accepted(outcome: Outcome) -> Accepted {
        match outcome {
            Outcome::Accepted(accepted) => accepted,
            Outcome::Rejected(err) => panic!("expected acceptance, got rejection: {err}"),
        }
    }

    #[test]
    fn deposit_in_awaiting_payment_is_accepted() {
        let outcome = accepted(step(
            DeviceState::AwaitingPayment,
            Event::Deposit,
            5,
            &mut FixedOutcome(false),
        ));
        assert_eq!(outcome.to, DeviceState::PaymentReceived);
        assert_eq!(outcome.remaining, 5);
        assert_eq!(outcome.released, 0);
    }

    #[test]
    fn withdraw_returns_payment() {
        let outcome = accepted(step(
            DeviceState::PaymentReceived,
            Event::WithdrawRequest,
            2,
            &mut FixedOutcome(false),
        ));
        assert_eq!(outcome.to, DeviceState::AwaitingPayment);
        assert_eq!(outcome.narration, "Payment returned");
        assert_eq!(outcome.remaining, 2);
    }

    #[test]
    fn trigger_picks_bonus_round_on_winning_draw() {
        let outcome = accepted(step(
            DeviceState::PaymentReceived,
            Event::Trigger,
            5,
            &mut FixedOutcome(true),
        ));
        assert_eq!(outcome.to, DeviceState::BonusRound);
        assert_eq!(outcome.remaining, 5);
    }

    #[test]
    fn trigger_picks_dispensing_on_losing_draw() {
        let outcome = accepted(step(
            DeviceState::PaymentReceived,
            Event::Trigger,
            5,
            &mut FixedOutcome(false),
        ));
        assert_eq!(outcome.to, DeviceState::Dispensing);
    }

    #[test]
    fn last_unit_never_enters_bonus_round() {
        let outcome = accepted(step(
            DeviceState::PaymentReceived,
            Event::Trigger,
            1,
            &mut FixedOutcome(true),
        ));
        assert_eq!(outcome.to, DeviceState::Dispensing);
    }

    #[test]
    fn bonus_eligibility_requires_win_and_spare_unit() {
        assert!(bonus_eligible(true, 2));
        assert!(!bonus_eligible(true, 1));
        assert!(!bonus_eligible(true, 0));
        assert!(!bonus_eligible(false, 10));
    }

    #[test]
    fn random_source_only_drawn_for_accepted_trigger() {
        let mut source = ScriptedOutcomes::new([]);
        for state in STATES {
            for event in EVENTS {
                step(state, event, 3, &mut source);
            }
        }
        assert_eq!(source.draws(), 1);
    }

    #[test]
    fn dispensing_settle_releases_one_unit() {
        let outcome = accepted(step(
            DeviceState::Dispensing,
            Event::Settle,
            5,
            &mut FixedOutcome(true),
        ));
        assert_eq!(outcome.to, DeviceState::AwaitingPayment);
        assert_eq!(outcome.remaining, 4);
        assert_eq!(outcome.released, 1);
        assert_eq!(outcome.narration, RELEASED);
    }

    #[test]
    fn dispensing_last_unit_depletes() {
        let outcome = accepted(step(
            DeviceState::Dispensing,
            Event::Settle,
            1,
            &mut FixedOutcome(false),
        ));
        assert_eq!(outcome.to, DeviceState::Depleted);
        assert_eq!(outcome.remaining, 0);
        assert_eq!(outcome.narration, RELEASED_LAST);
    }

    #[test]
    fn bonus_settle_releases_two_units() {
        let outcome = accepted(step(
            DeviceState::BonusRound,
            Event::Settle,
            5,
            &mut FixedOutcome(false),
        ));
        assert_eq!(outcome.to, DeviceState::AwaitingPayment);
        assert_eq!(outcome.remaining, 3);
        assert_eq!(outcome.released, 2);
        assert_eq!(outcome.narration, BONUS);
    }

    #[test]
    fn bonus_settle_with_two_units_depletes() {
        let outcome = accepted(step(
            DeviceState::BonusRound,
            Event::Settle,
            2,
            &mut FixedOutcome(false),
        ));
        assert_eq!(outcome.to, DeviceState::Depleted);
        assert_eq!(outcome.remaining, 0);
        assert_eq!(outcome.released, 2);
        assert_eq!(outcome.narration, BONUS_LAST);
    }

    #[test]
    fn bonus_settle_with_one_unit_stops_after_first_release() {
        let outcome = accepted(step(
            DeviceState::BonusRound,
            Event::Settle,
            1,
            &mut FixedOutcome(false),
        ));
        assert_eq!(outcome.to, DeviceState::Depleted);
        assert_eq!(outcome.remaining, 0);
        assert_eq!(outcome.released, 1);
    }

    #[test]
    fn settle_never_underflows() {
        for state in [DeviceState::Dispensing, DeviceState::BonusRound] {
            let outcome = accepted(step(state, Event::Settle, 0, &mut FixedOutcome(false)));
            assert_eq!(outcome.remaining, 0);
            assert_eq!(outcome.released, 0);
            assert_eq!(outcome.to, DeviceState::Depleted);
        }
    }

    #[test]
    fn depleted_rejects_everything() {
        for event in EVENTS {
            let outcome = step(DeviceState::Depleted, event, 0, &mut FixedOutcome(true));
            match outcome {
                Outcome::Rejected(err) => {
                    assert_eq!(err.state, DeviceState::Depleted);
                    assert_eq!(err.event, event);
                }
                Outcome::Accepted(_) => panic!("{event} accepted while depleted"),
            }
        }
    }

    #[test]
    fn every_rejection_carries_its_reason() {
        let rejected = [
            (
                DeviceState::AwaitingPayment,
                Event::WithdrawRequest,
                "You haven't inserted a payment",
            ),
            (DeviceState::AwaitingPayment, Event::Trigger, "You turned, but there's no payment"),
            (DeviceState::AwaitingPayment, Event::Settle, "You need to pay first"),
            (DeviceState::PaymentReceived, Event::Deposit, "You can't insert another payment"),
            (DeviceState::PaymentReceived, Event::Settle, "No unit dispensed"),
            (
                DeviceState::Dispensing,
                Event::Deposit,
                "Please wait, we're already giving you a unit",
            ),
            (
                DeviceState::Dispensing,
                Event::WithdrawRequest,
                "Sorry, you already turned the crank",
            ),
            (
                DeviceState::Dispensing,
                Event::Trigger,
                "Turning twice doesn't get you another unit!",
            ),
            (
                DeviceState::BonusRound,
                Event::Deposit,
                "Please wait, we're already giving you your units",
            ),
            (
                DeviceState::BonusRound,
                Event::WithdrawRequest,
                "Sorry, you already turned the crank",
            ),
            (
                DeviceState::BonusRound,
                Event::Trigger,
                "Turning twice doesn't get you another unit!",
            ),
            (
                DeviceState::Depleted,
                Event::Deposit,
                "You can't insert a payment, the machine is sold out",
            ),
            (
                DeviceState::Depleted,
                Event::WithdrawRequest,
                "You can't get a refund, you haven't inserted a payment",
            ),
            (DeviceState::Depleted, Event::Trigger, "You turned, but there are no units"),
            (DeviceState::Depleted, Event::Settle, "No units dispensed"),
        ];

        for (state, event, reason) in rejected {
            let remaining = if state == DeviceState::Depleted { 0 } else { 4 };
            let outcome = step(state, event, remaining, &mut FixedOutcome(true));
            assert_eq!(
                outcome,
                Outcome::Rejected(IllegalInState::new(state, event, reason)),
                "{state} on {event}"
            );
            assert_eq!(outcome.narration(), reason);
        }

        let mut source = FixedOutcome(true);
        let total_rejections = STATES
            .iter()
            .flat_map(|&state| EVENTS.iter().map(move |&event| (state, event)))
            .filter(|&(state, event)| !step(state, event, 4, &mut source).is_accepted())
            .count();
        assert_eq!(total_rejections, rejected.len());
    }
}
