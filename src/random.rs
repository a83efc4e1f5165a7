//! Boolean outcome sources for the bonus draw.
//!
//! The device never reaches for global randomness. A [`RandomSource`] is
//! injected at construction and consulted at most once per trigger, so
//! hosts can swap in a deterministic stub for replay and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Probability of a bonus round when none is configured.
pub const DEFAULT_BONUS_PROBABILITY: f64 = 0.5;

/// A source of boolean outcomes.
pub trait RandomSource {
    fn draw_boolean(&mut self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw_boolean(&mut self) -> bool {
        (**self).draw_boolean()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn draw_boolean(&mut self) -> bool {
        (**self).draw_boolean()
    }
}

/// Pseudo-random outcomes backed by [`StdRng`].
///
/// Each draw is `true` with the configured probability.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    probability: f64,
}

impl SeededRandom {
    /// Reproducible source seeded from `seed`.
    ///
    /// `probability` is clamped into `[0, 1]`; a NaN probability never wins.
    pub fn from_seed(seed: u64, probability: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            probability: clamp_probability(probability),
        }
    }

    /// Source seeded from operating system entropy.
    pub fn from_entropy(probability: f64) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            probability: clamp_probability(probability),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_entropy(DEFAULT_BONUS_PROBABILITY)
    }
}

impl RandomSource for SeededRandom {
    fn draw_boolean(&mut self) -> bool {
        self.rng.random_bool(self.probability)
    }
}

fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

/// Always yields the same outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOutcome(pub bool);

impl RandomSource for FixedOutcome {
    fn draw_boolean(&mut self) -> bool {
        self.0
    }
}

/// Replays a queue of outcomes, then falls back to a fixed value.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOutcomes {
    queue: VecDeque<bool>,
    fallback: bool,
    draws: usize,
}

impl ScriptedOutcomes {
    pub fn new<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            queue: outcomes.into_iter().collect(),
            fallback: false,
            draws: 0,
        }
    }

    /// Outcome returned once the script runs out.
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of outcomes drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Scripted outcomes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RandomSource for ScriptedOutcomes {
    fn draw_boolean(&mut self) -> bool {
        self.draws += 1;
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}
