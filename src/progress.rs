//! Saving and loading the player's level and experience.
//!
//! The save is a small JSON document keyed by `"player"`:
//!
//! ```json
//! {"player": {"level": 6, "experience": 12}}
//! ```
//!
//! Older saves wrote `exp` instead of `experience`; both are read.

use crate::errors::{PersistenceError, PersistenceResult};
use crate::progression::MAX_LEVEL;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// The only state that survives between sessions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRecord {
    pub level: u32,
    pub experience: u32,
}

/// A record as it appears on disk, where either field may be missing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SavedProgress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, alias = "exp", skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
}

impl SavedProgress {
    /// Fill the missing fields from `fallback`.
    pub fn resolve(&self, fallback: ProgressRecord) -> ProgressRecord {
        ProgressRecord {
            level: self.level.unwrap_or(fallback.level),
            experience: self.experience.unwrap_or(fallback.experience),
        }
    }
}

impl From<ProgressRecord> for SavedProgress {
    fn from(record: ProgressRecord) -> Self {
        Self {
            level: Some(record.level),
            experience: Some(record.experience),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
struct SaveFile {
    #[serde(default)]
    player: SavedProgress,
}

/// Somewhere a ProgressRecord can be kept between sessions.
pub trait ProgressStore {
    /// Read the saved progress. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> PersistenceResult<Option<SavedProgress>>;

    /// Overwrite the saved progress.
    fn save(&self, record: &ProgressRecord) -> PersistenceResult<()>;
}

/// Progress kept in a JSON file on local disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_failure(&self, details: impl ToString) -> PersistenceError {
        PersistenceError::ReadFailure {
            path: self.path.clone(),
            details: details.to_string(),
        }
    }

    fn write_failure(&self, details: impl ToString) -> PersistenceError {
        PersistenceError::WriteFailure {
            path: self.path.clone(),
            details: details.to_string(),
        }
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> PersistenceResult<Option<SavedProgress>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.read_failure(e)),
        };

        let save: SaveFile = serde_json::from_str(&content).map_err(|e| self.read_failure(e))?;
        if let Some(level) = save.player.level.filter(|&level| level > MAX_LEVEL) {
            return Err(self.read_failure(format!(
                "saved level {} is above the maximum of {}",
                level, MAX_LEVEL
            )));
        }
        info!(
            "Loaded player level {:?} exp {:?} from {}",
            save.player.level,
            save.player.experience,
            self.path.display()
        );
        Ok(Some(save.player))
    }

    fn save(&self, record: &ProgressRecord) -> PersistenceResult<()> {
        let save = SaveFile {
            player: SavedProgress::from(*record),
        };
        let json = serde_json::to_string(&save).map_err(|e| self.write_failure(e))?;
        fs::write(&self.path, json).map_err(|e| self.write_failure(e))?;
        info!("Game saved to {}", self.path.display());
        Ok(())
    }
}

/// Progress kept in memory, for tests and for embedding without a disk.
///
/// `failing()` builds a store whose every call errors, to exercise the non-fatal paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<SavedProgress>>,
    fail: bool,
    save_count: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(saved: SavedProgress) -> Self {
        Self {
            saved: RefCell::new(Some(saved)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// The last record written, if any.
    pub fn saved(&self) -> Option<SavedProgress> {
        *self.saved.borrow()
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.borrow()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> PersistenceResult<Option<SavedProgress>> {
        if self.fail {
            return Err(PersistenceError::ReadFailure {
                path: PathBuf::from("<memory>"),
                details: "store unavailable".to_string(),
            });
        }
        Ok(*self.saved.borrow())
    }

    fn save(&self, record: &ProgressRecord) -> PersistenceResult<()> {
        if self.fail {
            return Err(PersistenceError::WriteFailure {
                path: PathBuf::from("<memory>"),
                details: "store unavailable".to_string(),
            });
        }
        *self.saved.borrow_mut() = Some(SavedProgress::from(*record));
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }
}
