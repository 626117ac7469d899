//! Procedural generation of the wild opponent pool.

use crate::battle::rng::BattleRng;
use crate::moves::MoveCatalog;
use crate::pokemon::PokemonInst;
use schema::{MoveData, PokemonType};
use tracing::{debug, warn};

// Inclusive range wild opponents roll their max HP from
const OPPONENT_HP_MIN: u32 = 90;
const OPPONENT_HP_MAX: u32 = 130;
const OPPONENT_LEVEL: u32 = 1;
const MOVES_PER_OPPONENT: usize = 2;

/// Every opponent a battle can draw from. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpponentPool {
    opponents: Vec<PokemonInst>,
}

impl OpponentPool {
    /// Generate one opponent per roster name.
    ///
    /// Per name, in this order: a type drawn uniformly from `types`, two distinct moves
    /// sampled from that type's catalog entry (Normal's if it has none), and max HP in
    /// [90, 130]. Moves take the opponent's own type. Duplicate names are kept as
    /// separate entries. An empty `types` slice generates Normal opponents.
    pub fn generate(
        roster: &[String],
        types: &[PokemonType],
        catalog: &MoveCatalog,
        rng: &mut dyn BattleRng,
    ) -> Self {
        if types.is_empty() {
            warn!("No opponent types given; generating Normal opponents");
        }

        let opponents = roster
            .iter()
            .map(|name| {
                let pokemon_type = types
                    .get(rng.pick_index(types.len(), "opponent type"))
                    .copied()
                    .unwrap_or(PokemonType::Normal);
                let moves = sample_moves(catalog, pokemon_type, rng);
                let max_hp = rng.roll(OPPONENT_HP_MIN, OPPONENT_HP_MAX, "opponent max hp") as u16;
                PokemonInst::new(name.clone(), pokemon_type, OPPONENT_LEVEL, max_hp, moves)
            })
            .collect::<Vec<_>>();

        debug!("Generated opponent pool with {} entries", opponents.len());
        Self { opponents }
    }

    /// Wrap a hand-built list of opponents.
    pub fn from_opponents(opponents: Vec<PokemonInst>) -> Self {
        Self { opponents }
    }

    /// Draw one opponent uniformly, with replacement. Returns a copy; the pool is unchanged.
    pub fn sample(&self, rng: &mut dyn BattleRng) -> Option<PokemonInst> {
        if self.opponents.is_empty() {
            return None;
        }
        let index = rng.pick_index(self.opponents.len(), "opponent choice");
        self.opponents.get(index).cloned()
    }

    pub fn opponents(&self) -> &[PokemonInst] {
        &self.opponents
    }

    pub fn len(&self) -> usize {
        self.opponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opponents.is_empty()
    }
}

/// Sample up to two distinct catalog moves in random order.
fn sample_moves(
    catalog: &MoveCatalog,
    pokemon_type: PokemonType,
    rng: &mut dyn BattleRng,
) -> Vec<MoveData> {
    let mut candidates: Vec<_> = catalog.moves_for(pokemon_type).iter().collect();
    let mut chosen = Vec::with_capacity(MOVES_PER_OPPONENT);

    while chosen.len() < MOVES_PER_OPPONENT && !candidates.is_empty() {
        let index = rng.pick_index(candidates.len(), "opponent move");
        let entry = candidates.swap_remove(index);
        chosen.push(entry.to_move(pokemon_type));
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::{ScriptedRng, SeededRng};
    use crate::moves::CatalogMove;
    use crate::roster::{default_roster, DEFAULT_OPPONENT_TYPES};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pool_size_matches_roster() {
        let mut rng = SeededRng::from_seed(1);
        let pool = OpponentPool::generate(
            &default_roster(),
            &DEFAULT_OPPONENT_TYPES,
            &MoveCatalog::default(),
            &mut rng,
        );
        assert_eq!(pool.len(), 49);
    }

    #[test]
    fn test_generated_opponents_follow_rules() {
        let mut rng = SeededRng::from_seed(99);
        let catalog = MoveCatalog::default();
        let pool = OpponentPool::generate(
            &default_roster(),
            &DEFAULT_OPPONENT_TYPES,
            &catalog,
            &mut rng,
        );

        for opponent in pool.opponents() {
            assert!(DEFAULT_OPPONENT_TYPES.contains(&opponent.pokemon_type));
            assert!((90..=130).contains(&opponent.max_hp()));
            assert_eq!(opponent.current_hp(), opponent.max_hp());
            assert_eq!(opponent.level, 1);
            assert_eq!(opponent.moves().len(), 2);
            assert_ne!(opponent.moves()[0].name, opponent.moves()[1].name);

            let catalog_names: Vec<&str> = catalog
                .moves_for(opponent.pokemon_type)
                .iter()
                .map(|m| m.name.as_str())
                .collect();
            for move_data in opponent.moves() {
                assert_eq!(move_data.move_type, opponent.pokemon_type);
                assert!(catalog_names.contains(&move_data.name.as_str()));
            }
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let build = |seed| {
            OpponentPool::generate(
                &default_roster(),
                &DEFAULT_OPPONENT_TYPES,
                &MoveCatalog::default(),
                &mut SeededRng::from_seed(seed),
            )
        };
        assert_eq!(build(5), build(5));
    }

    #[test]
    fn test_scripted_generation_and_normal_fallback() {
        // type index 0 (Ghost), move index 1, hp 200 (clamped to 130).
        // The last remaining move is taken without a roll.
        let mut rng = ScriptedRng::new(vec![0, 1, 200]);
        let pool = OpponentPool::generate(
            &["Gastly".to_string()],
            &[PokemonType::Ghost, PokemonType::Fire],
            &MoveCatalog::default(),
            &mut rng,
        );

        let gastly = &pool.opponents()[0];
        assert_eq!(gastly.pokemon_type, PokemonType::Ghost);
        assert_eq!(gastly.max_hp(), 130);
        assert_eq!(
            gastly.move_names().collect::<Vec<_>>(),
            vec!["Scratch", "Tackle"]
        );
        assert!(gastly.moves().iter().all(|m| m.move_type == PokemonType::Ghost));
    }

    #[test]
    fn test_duplicate_names_are_independent_entries() {
        let roster = vec!["Ditto".to_string(), "Ditto".to_string()];
        // first Ditto: Fire, second: Water
        let mut rng = ScriptedRng::new(vec![0, 0, 100, 1, 0, 110]);
        let pool = OpponentPool::generate(
            &roster,
            &[PokemonType::Fire, PokemonType::Water],
            &MoveCatalog::default(),
            &mut rng,
        );

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.opponents()[0].pokemon_type, PokemonType::Fire);
        assert_eq!(pool.opponents()[1].pokemon_type, PokemonType::Water);
        assert_eq!(pool.opponents()[1].max_hp(), 110);
    }

    #[test]
    fn test_single_move_catalog_gives_one_move() {
        let mut catalog = MoveCatalog::new();
        catalog.insert(PokemonType::Normal, vec![CatalogMove::new("Tackle", 10, 20)]);
        let mut rng = ScriptedRng::new(vec![100]);

        let pool = OpponentPool::generate(
            &["Rattata".to_string()],
            &[PokemonType::Normal],
            &catalog,
            &mut rng,
        );
        assert_eq!(pool.opponents()[0].moves().len(), 1);
    }

    #[test]
    fn test_sampling_does_not_deplete() {
        let mut rng = SeededRng::from_seed(8);
        let pool = OpponentPool::generate(
            &default_roster(),
            &DEFAULT_OPPONENT_TYPES,
            &MoveCatalog::default(),
            &mut rng,
        );
        let before = pool.clone();
        for _ in 0..200 {
            assert!(pool.sample(&mut rng).is_some());
        }
        assert_eq!(pool, before);
        assert!(OpponentPool::default().sample(&mut rng).is_none());
    }
}
