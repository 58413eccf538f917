//! High score keeper.
//!
//! The best score lives in memory; a [`HighScoreStore`] makes it durable.
//! Storage failures are logged and never change what the game reports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("high score record is malformed")]
    Format(#[from] serde_json::Error),
}

/// Durable home of the single high-score integer.
pub trait HighScoreStore: Send {
    fn load(&self) -> Result<u32, StoreError>;
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// JSON file store: `{"high_score": n}`. A missing file reads as 0.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u32, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let record: HighScoreRecord = serde_json::from_str(&text)?;
        Ok(record.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        let text = serde_json::to_string(&HighScoreRecord { high_score: score })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// In-memory store. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Arc<Mutex<u32>>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
            failing: false,
        }
    }

    /// A store whose loads and saves always fail.
    pub fn failing() -> Self {
        Self {
            value: Arc::default(),
            failing: true,
        }
    }

    pub fn value(&self) -> u32 {
        *self.value.lock().expect("memory store mutex poisoned")
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(io::Error::new(io::ErrorKind::Other, "store unavailable").into());
        }
        Ok(())
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, StoreError> {
        self.check()?;
        Ok(self.value())
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.check()?;
        *self.value.lock().expect("memory store mutex poisoned") = score;
        Ok(())
    }
}

pub struct HighScore {
    best: u32,
    store: Box<dyn HighScoreStore>,
}

impl HighScore {
    /// Read the persisted value, starting from 0 if it cannot be read.
    pub fn load(store: impl HighScoreStore + 'static) -> Self {
        let best = match store.load() {
            Ok(best) => best,
            Err(e) => {
                warn!("could not load high score, starting from 0: {}", e);
                0
            }
        };
        Self {
            best,
            store: Box::new(store),
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record `candidate` if it beats the best. Returns whether it did.
    ///
    /// The in-memory value is updated first, so a failed save still reports
    /// the improvement.
    pub fn check_and_update(&mut self, candidate: u32) -> bool {
        if candidate <= self.best {
            return false;
        }
        self.best = candidate;
        match self.store.save(candidate) {
            Ok(()) => debug!("new high score {}", candidate),
            Err(e) => warn!("could not save high score {}: {}", candidate, e),
        }
        true
    }
}

impl std::fmt::Debug for HighScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighScore").field("best", &self.best).finish()
    }
}
