use crate::battle::rng::BattleRng;

// Experience awarded for a win, inclusive on both ends
const WIN_EXP_MIN: u32 = 10;
const WIN_EXP_MAX: u32 = 30;

/// Calculator for the experience a victory pays out
#[derive(Debug, Clone, Copy, Default)]
pub struct RewardCalculator;

impl RewardCalculator {
    /// Roll the experience for defeating an opponent, uniformly in [10, 30].
    /// The opponent itself does not affect the payout.
    pub fn roll_victory_exp(&self, rng: &mut dyn BattleRng) -> u32 {
        rng.roll(WIN_EXP_MIN, WIN_EXP_MAX, "victory experience")
    }
}
