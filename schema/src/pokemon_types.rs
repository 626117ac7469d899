use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter, EnumString,
)]
pub enum PokemonType {
    Fire,
    Electric,
    Grass,
    Normal,
    Flying,
    Psychic,
    Rock,
    Ground,
    Dark,
    Water,
    Fighting,
    Poison,
    Ghost,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Calculate type effectiveness multiplier for attacking type vs defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    ///
    /// The chart is one-directional: `(Fire, Grass)` being 2.0 says nothing about `(Grass, Fire)`.
    /// Any pair not listed here is neutral.
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f32 {
        use PokemonType::*;

        match (attacking, defending) {
            // Fire
            (Fire, Grass) => 2.0,
            (Fire, Water) | (Fire, Fire) => 0.5,

            // Electric
            (Electric, Water) => 2.0,
            (Electric, Grass) | (Electric, Electric) => 0.5,

            // Grass
            (Grass, Water) => 2.0,
            (Grass, Fire) | (Grass, Grass) => 0.5,

            // Flying
            (Flying, Grass) => 2.0,
            (Flying, Electric) => 0.5,

            // Psychic
            (Psychic, Fighting) | (Psychic, Poison) => 2.0,
            (Psychic, Psychic) => 0.5,

            // Rock
            (Rock, Fire) | (Rock, Flying) => 2.0,
            (Rock, Water) | (Rock, Grass) => 0.5,

            // Ground
            (Ground, Fire) | (Ground, Electric) => 2.0,
            (Ground, Grass) => 0.5,
            (Ground, Flying) => 0.0,

            // Dark
            (Dark, Psychic) | (Dark, Ghost) => 2.0,
            (Dark, Fighting) => 0.5,

            // Normal, Water, Fighting, Poison and Ghost have no chart entries.
            _ => 1.0,
        }
    }
}

/// How an attack's multiplier is announced to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effectiveness {
    SuperEffective,
    Neutral,
    NotVeryEffective,
    NoEffect,
}

impl Effectiveness {
    /// Buckets a multiplier into one of the announced categories.
    /// Anything above 1.0 counts as super effective, not just 2.0.
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier > 1.0 {
            Effectiveness::SuperEffective
        } else if multiplier > 0.0 && multiplier < 1.0 {
            Effectiveness::NotVeryEffective
        } else if multiplier == 0.0 {
            Effectiveness::NoEffect
        } else {
            Effectiveness::Neutral
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Effectiveness::SuperEffective => Some("It's super effective!"),
            Effectiveness::NotVeryEffective => Some("It's not very effective..."),
            Effectiveness::NoEffect => Some("It had no effect..."),
            Effectiveness::Neutral => None,
        }
    }
}
