//! Fixed data the game starts from: the player's Pokemon and the names wild
//! opponents are generated under.

use crate::pokemon::PokemonInst;
use schema::{MoveData, PokemonType};

/// Names wild opponents are generated under. Types and moves are rolled per name.
pub const DEFAULT_ROSTER: [&str; 49] = [
    "Pidgey", "Rattata", "Zubat", "Geodude", "Onix", "Psyduck", "Growlithe", "Poliwag",
    "Abra", "Machop", "Magnemite", "Gastly", "Krabby", "Voltorb", "Exeggcute", "Cubone",
    "Hitmonlee", "Koffing", "Rhyhorn", "Horsea", "Goldeen", "Staryu", "Scyther", "Jynx",
    "Electabuzz", "Magmar", "Pinsir", "Tauros", "Magikarp", "Gyarados", "Lapras", "Ditto",
    "Eevee", "Vaporeon", "Jolteon", "Flareon", "Porygon", "Omanyte", "Kabuto", "Aerodactyl",
    "Snorlax", "Articuno", "Zapdos", "Moltres", "Dratini", "Dragonair", "Dragonite", "Mewtwo",
    "Mew",
];

/// Types a wild opponent can roll.
pub const DEFAULT_OPPONENT_TYPES: [PokemonType; 10] = [
    PokemonType::Fire,
    PokemonType::Water,
    PokemonType::Grass,
    PokemonType::Electric,
    PokemonType::Normal,
    PokemonType::Flying,
    PokemonType::Psychic,
    PokemonType::Rock,
    PokemonType::Ground,
    PokemonType::Dark,
];

pub fn default_roster() -> Vec<String> {
    DEFAULT_ROSTER.iter().map(|name| name.to_string()).collect()
}

/// The player's Pokemon as it is before any saved progress is applied.
pub fn default_player() -> PokemonInst {
    PokemonInst::new(
        "Charizard",
        PokemonType::Fire,
        5,
        120,
        vec![
            MoveData::new("Flamethrower", 25, 35, PokemonType::Fire),
            MoveData::new("Slash", 15, 25, PokemonType::Normal),
            MoveData::new("Fly", 20, 30, PokemonType::Flying),
            MoveData::new("Smokescreen", 5, 10, PokemonType::Normal),
        ],
    )
    .with_experience(0, 50)
}
