// In: src/lib.rs

//! Pocket Battle Engine
//!
//! A small turn-based battle simulator: one player Pokemon against randomly
//! generated wild opponents, with type effectiveness, experience and leveling
//! persisted between sessions. The engine is presentation-agnostic; it emits
//! `BattleEvent`s and waits for the presenter to call `advance`.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod config;
pub mod errors;
pub mod moves;
pub mod pokemon;
pub mod pool;
pub mod progress;
pub mod progression;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pocket-battle` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the core data definitions.
pub use schema::{Effectiveness, MoveData, PokemonType, PowerRange};

// --- From this crate's modules (`src/`) ---

// Core battle engine and state.
pub use battle::engine::{resolve_turn, BattleEngine};
pub use battle::rng::{BattleRng, ScriptedRng, SeededRng};
pub use battle::state::{BattleEvent, BattlePair, EventBus, GameState, Side};

// Combatants and where they come from.
pub use moves::{CatalogMove, MoveCatalog};
pub use pokemon::PokemonInst;
pub use pool::OpponentPool;
pub use roster::{default_player, default_roster, DEFAULT_OPPONENT_TYPES};

// Persistence and configuration.
pub use config::{GameConfig, Pacing};
pub use progress::{JsonFileStore, MemoryStore, ProgressRecord, ProgressStore, SavedProgress};

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleEngineError, BattleResult, BattleStateError, ConfigError, ConfigResult,
    PersistenceError, PersistenceResult,
};
