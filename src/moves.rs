//! Per-type move lists that generated opponents draw their moves from.

use schema::{MoveData, PokemonType, PowerRange};
use std::collections::HashMap;
use tracing::debug;

/// A named move and its power range, before it is bound to a Pokemon's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMove {
    pub name: String,
    pub power: PowerRange,
}

impl CatalogMove {
    pub fn new(name: impl Into<String>, min: u16, max: u16) -> Self {
        Self {
            name: name.into(),
            power: PowerRange::new(min, max),
        }
    }

    /// Binds this entry to a type, producing a usable move.
    pub fn to_move(&self, move_type: PokemonType) -> MoveData {
        MoveData {
            name: self.name.clone(),
            power: self.power,
            move_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveCatalog {
    entries: HashMap<PokemonType, Vec<CatalogMove>>,
}

impl MoveCatalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, pokemon_type: PokemonType, moves: Vec<CatalogMove>) {
        self.entries.insert(pokemon_type, moves);
    }

    /// The moves offered for a type, or the Normal list when the type has none.
    ///
    /// Returns an empty slice only if Normal itself is missing.
    pub fn moves_for(&self, pokemon_type: PokemonType) -> &[CatalogMove] {
        match self.entries.get(&pokemon_type) {
            Some(moves) if !moves.is_empty() => moves,
            _ => {
                debug!(
                    "No move catalog for {}, falling back to {}",
                    pokemon_type,
                    PokemonType::Normal
                );
                self.entries
                    .get(&PokemonType::Normal)
                    .map(Vec::as_slice)
                    .unwrap_or(&[])
            }
        }
    }
}

impl Default for MoveCatalog {
    fn default() -> Self {
        use PokemonType::*;

        let mut catalog = MoveCatalog::new();
        let table: [(PokemonType, [(&str, u16, u16); 2]); 10] = [
            (Fire, [("Flamethrower", 25, 35), ("Ember", 15, 25)]),
            (Water, [("Water Gun", 15, 25), ("Bubble", 10, 20)]),
            (Grass, [("Vine Whip", 15, 25), ("Razor Leaf", 20, 30)]),
            (Electric, [("Thunderbolt", 20, 30), ("Spark", 15, 25)]),
            (Normal, [("Tackle", 10, 20), ("Scratch", 10, 20)]),
            (Flying, [("Gust", 15, 25), ("Peck", 10, 20)]),
            (Psychic, [("Confusion", 20, 30), ("Psybeam", 25, 35)]),
            (Rock, [("Rock Throw", 20, 30), ("Smash", 25, 35)]),
            (Ground, [("Mud Slap", 15, 25), ("Earthquake", 30, 40)]),
            (Dark, [("Bite", 15, 25), ("Slash", 20, 30)]),
        ];

        for (pokemon_type, moves) in table {
            catalog.insert(
                pokemon_type,
                moves
                    .iter()
                    .map(|(name, min, max)| CatalogMove::new(*name, *min, *max))
                    .collect(),
            );
        }
        catalog
    }
}
