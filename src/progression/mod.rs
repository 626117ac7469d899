pub mod leveling;
pub mod rewards;

pub use leveling::{award_experience, next_threshold, restore_progress, LevelUp, MAX_LEVEL};
pub use rewards::RewardCalculator;
