use crate::battle::state::GameState;
use std::fmt;
use std::path::PathBuf;

/// Main error type for the pocket-battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEngineError {
    /// Error related to invalid battle state
    BattleState(BattleStateError),
    /// Error related to invalid player actions
    Action(ActionError),
    /// Error related to loading or saving player progress
    Persistence(PersistenceError),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// The opponent pool has no entries to sample from
    EmptyOpponentPool,
    /// The engine expected a live battle but none exists
    NoActiveBattle,
    /// Battle state is in an inconsistent or corrupted state
    InconsistentState(String),
}

/// Errors related to player actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The named move is not in the acting Pokemon's move set
    InvalidMoveSelection(String),
    /// Action is not valid in the current game state
    InvalidActionForGameState(GameState),
}

/// Errors raised by a progress store. None of these are fatal to a battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The save could not be read or did not parse
    ReadFailure { path: PathBuf, details: String },
    /// The save could not be written
    WriteFailure { path: PathBuf, details: String },
}

/// Errors raised while loading the game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config file exists but could not be read
    Io { path: PathBuf, details: String },
    /// The config file is not valid RON for `GameConfig`
    Malformed { path: PathBuf, details: String },
}

impl fmt::Display for BattleEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEngineError::BattleState(err) => write!(f, "Battle state error: {}", err),
            BattleEngineError::Action(err) => write!(f, "Action error: {}", err),
            BattleEngineError::Persistence(err) => write!(f, "Persistence error: {}", err),
        }
    }
}

impl fmt::Display for BattleStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStateError::EmptyOpponentPool => write!(f, "Opponent pool is empty"),
            BattleStateError::NoActiveBattle => write!(f, "No battle is in progress"),
            BattleStateError::InconsistentState(details) => {
                write!(f, "Inconsistent battle state: {}", details)
            }
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::InvalidMoveSelection(name) => write!(f, "Unknown move: {}", name),
            ActionError::InvalidActionForGameState(state) => {
                write!(f, "Action not allowed while {:?}", state)
            }
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::ReadFailure { path, details } => {
                write!(f, "Failed to load save file {}: {}", path.display(), details)
            }
            PersistenceError::WriteFailure { path, details } => {
                write!(f, "Failed to save game to {}: {}", path.display(), details)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, details } => {
                write!(f, "Could not read config {}: {}", path.display(), details)
            }
            ConfigError::Malformed { path, details } => {
                write!(f, "Malformed config {}: {}", path.display(), details)
            }
        }
    }
}

impl std::error::Error for BattleEngineError {}
impl std::error::Error for BattleStateError {}
impl std::error::Error for ActionError {}
impl std::error::Error for PersistenceError {}
impl std::error::Error for ConfigError {}

impl From<BattleStateError> for BattleEngineError {
    fn from(err: BattleStateError) -> Self {
        BattleEngineError::BattleState(err)
    }
}

impl From<ActionError> for BattleEngineError {
    fn from(err: ActionError) -> Self {
        BattleEngineError::Action(err)
    }
}

impl From<PersistenceError> for BattleEngineError {
    fn from(err: PersistenceError) -> Self {
        BattleEngineError::Persistence(err)
    }
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
