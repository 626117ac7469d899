// Pocket Battle Schema - Shared type definitions
// This crate contains the core enums and plain data types that the engine,
// its save format and any presentation layer agree on.

// Re-export the main types
pub use battle_data::*;
pub use pokemon_types::*;
pub use strum::IntoEnumIterator;

pub mod battle_data;
pub mod pokemon_types;
