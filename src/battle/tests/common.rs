use crate::battle::engine::BattleEngine;
use crate::battle::rng::ScriptedRng;
use crate::battle::state::{BattleEvent, GameState};
use crate::pokemon::PokemonInst;
use crate::pool::OpponentPool;
use crate::progress::{MemoryStore, ProgressStore};
use crate::roster::default_player;
use schema::{MoveData, PokemonType};

pub type TestEngine = BattleEngine<MemoryStore, ScriptedRng>;

/// A builder for creating test Pokemon instances with common defaults.
///
/// # Example
/// ```
/// let pokemon = TestPokemonBuilder::new("Rattata", PokemonType::Normal, 1)
///     .with_moves(vec![tackle()])
///     .with_max_hp(40)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    name: String,
    pokemon_type: PokemonType,
    level: u32,
    max_hp: u16,
    moves: Option<Vec<MoveData>>,
    experience: u32,
    exp_to_next_level: u32,
}

impl TestPokemonBuilder {
    /// Creates a new builder with 100 max HP and no experience.
    pub fn new(name: &str, pokemon_type: PokemonType, level: u32) -> Self {
        Self {
            name: name.to_string(),
            pokemon_type,
            level,
            max_hp: 100,
            moves: None,
            experience: 0,
            exp_to_next_level: 50,
        }
    }

    /// Sets the moves. Defaults to a single Tackle.
    pub fn with_moves(mut self, moves: Vec<MoveData>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn with_max_hp(mut self, max_hp: u16) -> Self {
        self.max_hp = max_hp;
        self
    }

    pub fn with_experience(mut self, experience: u32, exp_to_next_level: u32) -> Self {
        self.experience = experience;
        self.exp_to_next_level = exp_to_next_level;
        self
    }

    pub fn build(self) -> PokemonInst {
        let moves = self.moves.unwrap_or_else(|| vec![tackle()]);
        PokemonInst::new(
            self.name,
            self.pokemon_type,
            self.level,
            self.max_hp,
            moves,
        )
        .with_experience(self.experience, self.exp_to_next_level)
    }
}

pub fn tackle() -> MoveData {
    MoveData::new("Tackle", 10, 20, PokemonType::Normal)
}

pub fn scratch() -> MoveData {
    MoveData::new("Scratch", 10, 20, PokemonType::Normal)
}

/// The default player's starting template with a different experience bar.
pub fn charizard_with_experience(experience: u32, exp_to_next_level: u32) -> PokemonInst {
    default_player().with_experience(experience, exp_to_next_level)
}

/// A level 1 Grass opponent with 100 HP and a single Tackle.
pub fn grass_opponent() -> PokemonInst {
    TestPokemonBuilder::new("Bulbasaur", PokemonType::Grass, 1).build()
}

/// Engine over a one-entry pool, so starting a battle consumes no roll.
pub fn create_test_engine(
    player: PokemonInst,
    opponent: PokemonInst,
    outcomes: Vec<u32>,
) -> TestEngine {
    create_test_engine_with_store(player, opponent, MemoryStore::new(), outcomes)
}

pub fn create_test_engine_with_store(
    player: PokemonInst,
    opponent: PokemonInst,
    store: MemoryStore,
    outcomes: Vec<u32>,
) -> TestEngine {
    BattleEngine::new(
        player,
        OpponentPool::from_opponents(vec![opponent]),
        store,
        ScriptedRng::new(outcomes),
    )
}

/// Advance until the engine asks for input or goes idle, collecting every event.
pub fn advance_until_input<S: ProgressStore>(
    engine: &mut BattleEngine<S, ScriptedRng>,
) -> Vec<BattleEvent> {
    let mut events = Vec::new();
    while !matches!(
        engine.game_state(),
        GameState::PlayerTurn | GameState::Idle
    ) {
        match engine.advance() {
            Ok(batch) => events.extend(batch),
            Err(err) => panic!("advance failed in {:?}: {}", engine.game_state(), err),
        }
    }
    events
}
