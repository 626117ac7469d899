use crate::pokemon::PokemonInst;
use serde::{Deserialize, Serialize};

// Each level-up grows the next threshold by half and adds a flat HP bonus
const THRESHOLD_GROWTH: f64 = 1.5;
const HP_PER_LEVEL: u16 = 10;

/// Highest level a save may restore to. The threshold curve makes anything beyond
/// unreachable through play.
pub const MAX_LEVEL: u32 = 100;

/// One level gained, as reported to the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
    pub new_max_hp: u16,
    pub exp_to_next_level: u32,
}

/// `floor(threshold * 1.5)`, never below 1 so the leveling loop always terminates.
pub fn next_threshold(threshold: u32) -> u32 {
    ((threshold as f64 * THRESHOLD_GROWTH).floor() as u32).max(1)
}

/// Apply a single level-up: bump the level, grow the threshold, add max HP and fully heal.
fn level_up(pokemon: &mut PokemonInst) -> LevelUp {
    pokemon.level = pokemon.level.saturating_add(1);
    pokemon.exp_to_next_level = next_threshold(pokemon.exp_to_next_level);
    pokemon.set_max_hp(pokemon.max_hp().saturating_add(HP_PER_LEVEL));
    pokemon.set_hp_to_max();

    LevelUp {
        new_level: pokemon.level,
        new_max_hp: pokemon.max_hp(),
        exp_to_next_level: pokemon.exp_to_next_level,
    }
}

/// Add experience and apply every level-up it pays for, in order.
///
/// A single award can cross several thresholds; each crossing spends the current
/// threshold before the next one is computed.
pub fn award_experience(pokemon: &mut PokemonInst, amount: u32) -> Vec<LevelUp> {
    pokemon.experience = pokemon.experience.saturating_add(amount);

    let mut level_ups = Vec::new();
    while pokemon.experience >= pokemon.exp_to_next_level {
        pokemon.experience -= pokemon.exp_to_next_level;
        level_ups.push(level_up(pokemon));
    }
    level_ups
}

/// Bring a template Pokemon up to a saved level and experience.
///
/// Threshold and max HP are not saved, so they are rebuilt by replaying the level-ups
/// between the template's level and the saved one. A saved level at or below the
/// template's keeps the template's threshold and HP. Levels are clamped to `MAX_LEVEL`.
pub fn restore_progress(pokemon: &mut PokemonInst, level: u32, experience: u32) {
    let level = level.clamp(1, MAX_LEVEL);
    while pokemon.level < level {
        level_up(pokemon);
    }
    pokemon.level = level;
    pokemon.experience = experience;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::{MoveData, PokemonType};

    fn charizard(experience: u32, threshold: u32) -> PokemonInst {
        PokemonInst::new(
            "Charizard",
            PokemonType::Fire,
            5,
            120,
            vec![MoveData::new("Flamethrower", 25, 35, PokemonType::Fire)],
        )
        .with_experience(experience, threshold)
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut pokemon = charizard(0, 50);
        let level_ups = award_experience(&mut pokemon, 30);
        assert!(level_ups.is_empty());
        assert_eq!(pokemon.experience, 30);
        assert_eq!(pokemon.level, 5);
    }

    #[test]
    fn test_single_level_up_carries_remainder() {
        let mut pokemon = charizard(40, 50);
        pokemon.set_hp(10);

        let level_ups = award_experience(&mut pokemon, 45);

        assert_eq!(
            level_ups,
            vec![LevelUp {
                new_level: 6,
                new_max_hp: 130,
                exp_to_next_level: 75,
            }]
        );
        assert_eq!(pokemon.experience, 35);
        assert_eq!(pokemon.exp_to_next_level, 75);
        assert_eq!(pokemon.current_hp(), 130);
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let mut pokemon = charizard(20, 50);
        let level_ups = award_experience(&mut pokemon, 30);
        assert_eq!(level_ups.len(), 1);
        assert_eq!(pokemon.experience, 0);
    }

    #[test]
    fn test_double_level_up_in_one_award() {
        // 50 spent for level 6, then 75 for level 7, leaving 5.
        let mut pokemon = charizard(100, 50);
        let level_ups = award_experience(&mut pokemon, 30);

        assert_eq!(
            level_ups,
            vec![
                LevelUp {
                    new_level: 6,
                    new_max_hp: 130,
                    exp_to_next_level: 75,
                },
                LevelUp {
                    new_level: 7,
                    new_max_hp: 140,
                    exp_to_next_level: 112,
                },
            ]
        );
        assert_eq!(pokemon.experience, 5);
        assert_eq!(pokemon.level, 7);
    }

    #[test]
    fn test_threshold_is_floored() {
        assert_eq!(next_threshold(50), 75);
        assert_eq!(next_threshold(75), 112);
        assert_eq!(next_threshold(112), 168);
        assert_eq!(next_threshold(1), 1);
        assert_eq!(next_threshold(0), 1);
    }

    #[test]
    fn test_restore_progress_replays_curve() {
        let mut pokemon = charizard(0, 50);
        restore_progress(&mut pokemon, 7, 12);

        assert_eq!(pokemon.level, 7);
        assert_eq!(pokemon.experience, 12);
        assert_eq!(pokemon.exp_to_next_level, 112);
        assert_eq!(pokemon.max_hp(), 140);
    }

    #[test]
    fn test_restore_progress_below_template_level() {
        let mut pokemon = charizard(0, 50);
        restore_progress(&mut pokemon, 3, 8);

        assert_eq!(pokemon.level, 3);
        assert_eq!(pokemon.experience, 8);
        assert_eq!(pokemon.exp_to_next_level, 50);
        assert_eq!(pokemon.max_hp(), 120);
    }

    #[test]
    fn test_restore_progress_clamps_to_max_level() {
        let mut pokemon = charizard(0, 50);
        restore_progress(&mut pokemon, u32::MAX, 3);

        assert_eq!(pokemon.level, MAX_LEVEL);
        assert_eq!(pokemon.experience, 3);
        assert_eq!(pokemon.max_hp(), 120 + 10 * (MAX_LEVEL - 5) as u16);
    }

    #[test]
    fn test_level_up_at_highest_level_saturates() {
        let mut pokemon = charizard(0, 50);
        pokemon.level = u32::MAX;

        let level_ups = award_experience(&mut pokemon, 50);

        assert_eq!(level_ups.len(), 1);
        assert_eq!(pokemon.level, u32::MAX);
        assert_eq!(pokemon.experience, 0);
    }
}
