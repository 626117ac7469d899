use crate::pokemon_types::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive base-power range a move rolls from on every use.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerRange {
    pub min: u16,
    pub max: u16,
}

impl PowerRange {
    /// Builds a range, swapping the bounds if they arrive reversed.
    pub fn new(min: u16, max: u16) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn contains(&self, power: u16) -> bool {
        power >= self.min && power <= self.max
    }
}

impl fmt::Display for PowerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveData {
    pub name: String,
    pub power: PowerRange,
    pub move_type: PokemonType,
}

impl MoveData {
    pub fn new(name: impl Into<String>, min: u16, max: u16, move_type: PokemonType) -> Self {
        Self {
            name: name.into(),
            power: PowerRange::new(min, max),
            move_type,
        }
    }
}

impl fmt::Display for MoveData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, power {})", self.name, self.move_type, self.power)
    }
}
