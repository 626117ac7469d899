//! A module for defining AI behaviors for battle opponents.

use crate::battle::rng::BattleRng;
use crate::pokemon::PokemonInst;

/// A trait for any system that can decide which move a Pokemon uses.
pub trait Behavior {
    /// Picks one of the Pokemon's moves by name, or None if it knows no moves.
    fn choose_move(&self, pokemon: &PokemonInst, rng: &mut dyn BattleRng) -> Option<String>;
}

/// Picks uniformly among the known moves, with no strategy at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAI;

impl RandomAI {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for RandomAI {
    fn choose_move(&self, pokemon: &PokemonInst, rng: &mut dyn BattleRng) -> Option<String> {
        let moves = pokemon.moves();
        if moves.is_empty() {
            return None;
        }
        let index = rng.pick_index(moves.len(), "enemy move choice");
        moves.get(index).map(|m| m.name.clone())
    }
}
