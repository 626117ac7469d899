//! Randomness sources for pool generation and battle resolution.
//!
//! Everything random in the engine goes through [`BattleRng`], so a battle can be
//! replayed exactly from a seed or driven by hand-picked outcomes in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::trace;

/// A source of uniform integer rolls.
pub trait BattleRng {
    /// Uniform roll in the inclusive range `[min, max]`.
    /// `reason` names what the roll decides and only shows up in trace logs.
    fn roll(&mut self, min: u32, max: u32, reason: &str) -> u32;

    /// Uniform index into a collection of `len` items. Returns 0 for `len <= 1`.
    fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        if len <= 1 {
            return 0;
        }
        let upper = u32::try_from(len - 1).unwrap_or(u32::MAX);
        self.roll(0, upper, reason) as usize
    }
}

/// Reproducible RNG backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the operating system. Not reproducible.
    pub fn from_os() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }
}

impl BattleRng for SeededRng {
    fn roll(&mut self, min: u32, max: u32, reason: &str) -> u32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let outcome = self.inner.random_range(low..=high);
        trace!("[RNG] rolled {} in {}..={} for: {}", outcome, low, high, reason);
        outcome
    }
}

/// Replays a fixed list of outcomes, one per roll, for tests and demos.
///
/// Each outcome is clamped into the requested range, so a forced power roll of 30
/// against a 25-35 move yields exactly 30, and an index of 1 picks the second move.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    outcomes: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(outcomes: Vec<u32>) -> Self {
        Self {
            outcomes: outcomes.into(),
        }
    }

    pub fn push(&mut self, outcome: u32) {
        self.outcomes.push_back(outcome);
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}

impl BattleRng for ScriptedRng {
    fn roll(&mut self, min: u32, max: u32, reason: &str) -> u32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let Some(outcome) = self.outcomes.pop_front() else {
            panic!(
                "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more scripted values.",
                reason
            );
        };
        let clamped = outcome.clamp(low, high);
        trace!("[RNG] consumed {} for: {}", clamped, reason);
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = SeededRng::from_seed(42);
        let mut b = SeededRng::from_seed(42);
        let rolls_a: Vec<u32> = (0..20).map(|_| a.roll(10, 30, "test")).collect();
        let rolls_b: Vec<u32> = (0..20).map(|_| b.roll(10, 30, "test")).collect();
        assert_eq!(rolls_a, rolls_b);
        assert!(rolls_a.iter().all(|r| (10..=30).contains(r)));
    }

    #[test]
    fn test_seeded_rng_handles_reversed_and_degenerate_ranges() {
        let mut rng = SeededRng::from_seed(7);
        for _ in 0..20 {
            let r = rng.roll(35, 25, "reversed");
            assert!((25..=35).contains(&r));
        }
        assert_eq!(rng.roll(5, 5, "single"), 5);
        assert_eq!(rng.pick_index(1, "single item"), 0);
        assert_eq!(rng.pick_index(0, "no items"), 0);
    }

    #[test]
    fn test_scripted_rng_replays_and_clamps() {
        let mut rng = ScriptedRng::new(vec![30, 1, 99, 0]);
        assert_eq!(rng.roll(25, 35, "power"), 30);
        assert_eq!(rng.pick_index(2, "move"), 1);
        assert_eq!(rng.roll(10, 30, "exp"), 30);
        assert_eq!(rng.roll(90, 130, "hp"), 90);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_pick_index_with_one_item_does_not_consume() {
        let mut rng = ScriptedRng::new(vec![]);
        assert_eq!(rng.pick_index(1, "only move"), 0);
    }

    #[test]
    #[should_panic(expected = "ScriptedRng exhausted")]
    fn test_scripted_rng_panics_when_exhausted() {
        let mut rng = ScriptedRng::new(vec![]);
        rng.roll(1, 10, "nothing left");
    }
}
