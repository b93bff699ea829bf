//! Best score record
//!
//! Persisted as a small JSON document, one record at most. Storage failures
//! never reach gameplay: unreadable storage reads as "no record" and failed
//! writes are dropped after a warning.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// File name of the record, stored next to the executable
pub const SCORE_FILE_NAME: &str = ".guessnumber_score.json";

/// The single best score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub best_score: u64,
    /// `[min, max]` the score was achieved on
    #[serde(default)]
    pub best_range: [i64; 2],
    /// Unix timestamp (seconds)
    #[serde(default)]
    pub timestamp: i64,
}

/// Result of offering a score to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub is_record: bool,
    pub previous_best: Option<u64>,
    pub current_best: u64,
}

/// Where the record lives
pub trait ScoreBackend {
    /// `Ok(None)` when nothing has been stored yet
    fn read(&self) -> Result<Option<ScoreRecord>, StorageError>;
    fn write(&mut self, record: &ScoreRecord) -> Result<(), StorageError>;
}

/// JSON file backend
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Record file beside the running executable, or in the working directory
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(SCORE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreBackend for FileBackend {
    fn read(&self) -> Result<Option<ScoreRecord>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn write(&mut self, record: &ScoreRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory backend
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    pub record: Option<ScoreRecord>,
    /// Make every write fail
    pub fail_writes: bool,
}

impl ScoreBackend for MemoryBackend {
    fn read(&self) -> Result<Option<ScoreRecord>, StorageError> {
        Ok(self.record.clone())
    }

    fn write(&mut self, record: &ScoreRecord) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(std::io::Error::other("write disabled").into());
        }
        self.record = Some(record.clone());
        Ok(())
    }
}

/// Best score store over an injected backend
///
/// Load-then-save is not guarded against other processes sharing the backend.
#[derive(Debug)]
pub struct ScoreStore<B: ScoreBackend> {
    backend: B,
}

impl<B: ScoreBackend> ScoreStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current record, `None` if absent or unreadable
    pub fn load(&self) -> Option<ScoreRecord> {
        match self.backend.read() {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Ignoring unreadable score record: {}", e);
                None
            }
        }
    }

    /// Offer a winning score, stamped with the current time
    pub fn update(&mut self, new_score: u64, min: i64, max: i64) -> ScoreUpdate {
        self.update_at(new_score, min, max, unix_now())
    }

    /// Offer a winning score with an explicit timestamp
    ///
    /// Only a strictly higher score replaces the record.
    pub fn update_at(&mut self, new_score: u64, min: i64, max: i64, timestamp: i64) -> ScoreUpdate {
        let previous_best = self.load().map(|r| r.best_score);
        let is_record = previous_best.is_none_or(|prev| new_score > prev);

        if !is_record {
            return ScoreUpdate {
                is_record,
                previous_best,
                current_best: previous_best.unwrap_or(new_score),
            };
        }

        let record = ScoreRecord {
            best_score: new_score,
            best_range: [min, max],
            timestamp,
        };
        match self.backend.write(&record) {
            Ok(()) => log::info!("New best score {} saved", new_score),
            Err(e) => log::warn!("Could not save best score: {}", e),
        }

        ScoreUpdate {
            is_record,
            previous_best,
            current_best: new_score,
        }
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
