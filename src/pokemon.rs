use schema::{MoveData, PokemonType};
use serde::{Deserialize, Serialize};

/// Experience needed to go from level 1 to level 2 for a freshly built Pokemon.
pub const DEFAULT_EXP_TO_NEXT_LEVEL: u32 = 50;

/// A battling creature. Health is kept private so it can never leave `0..=max_hp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    pub name: String,
    pub pokemon_type: PokemonType,
    pub level: u32,
    pub experience: u32,
    pub exp_to_next_level: u32,
    max_hp: u16,
    current_hp: u16,
    moves: Vec<MoveData>,
}

impl PokemonInst {
    /// Create a new Pokemon at full health.
    ///
    /// Moves keep their given order; a later move with an already-used name is dropped,
    /// so names stay unique within one Pokemon. Level, threshold and max HP are floored at 1.
    pub fn new(
        name: impl Into<String>,
        pokemon_type: PokemonType,
        level: u32,
        max_hp: u16,
        moves: Vec<MoveData>,
    ) -> Self {
        let mut unique_moves: Vec<MoveData> = Vec::with_capacity(moves.len());
        for move_data in moves {
            if !unique_moves.iter().any(|m| m.name == move_data.name) {
                unique_moves.push(move_data);
            }
        }

        let max_hp = max_hp.max(1);
        PokemonInst {
            name: name.into(),
            pokemon_type,
            level: level.max(1),
            experience: 0,
            exp_to_next_level: DEFAULT_EXP_TO_NEXT_LEVEL,
            max_hp,
            current_hp: max_hp,
            moves: unique_moves,
        }
    }

    /// Sets the starting experience and level-up threshold.
    pub fn with_experience(mut self, experience: u32, exp_to_next_level: u32) -> Self {
        self.experience = experience;
        self.exp_to_next_level = exp_to_next_level.max(1);
        self
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn moves(&self) -> &[MoveData] {
        &self.moves
    }

    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(|m| m.name.as_str())
    }

    pub fn get_move(&self, name: &str) -> Option<&MoveData> {
        self.moves.iter().find(|m| m.name == name)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Apply damage, clamping at zero. Returns true if this knocked the Pokemon out.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        let was_fainted = self.is_fainted();
        self.current_hp = self.current_hp.saturating_sub(damage);
        !was_fainted && self.is_fainted()
    }

    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp);
    }

    pub fn set_hp_to_max(&mut self) {
        self.current_hp = self.max_hp;
    }

    /// Raise (or lower) max HP, keeping current HP within the new bound.
    pub fn set_max_hp(&mut self, max_hp: u16) {
        self.max_hp = max_hp.max(1);
        self.current_hp = self.current_hp.min(self.max_hp);
    }
}
