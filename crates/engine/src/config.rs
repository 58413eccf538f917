//! Runtime configuration from environment variables.

use std::path::PathBuf;

use crate::core::{GameSession, RandomBricks};
use crate::types::{GameMode, DEFAULT_SPRINT_LINES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Brick sequence seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub high_score_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Endless,
            seed: None,
            high_score_path: PathBuf::from("highscore.json"),
            log_path: PathBuf::from("brickfall.log"),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// - `BRICKFALL_MODE`: `endless` (default) or `sprint`
    /// - `BRICKFALL_SPRINT_LINES`: sprint target, default 40
    /// - `BRICKFALL_SEED`: u64 seed for the brick sequence
    /// - `BRICKFALL_HIGH_SCORE_FILE`: default `highscore.json`
    /// - `BRICKFALL_LOG_FILE`: default `brickfall.log`
    ///
    /// Malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let target_lines = lookup("BRICKFALL_SPRINT_LINES")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_SPRINT_LINES);

        let mode = match lookup("BRICKFALL_MODE")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            Some("sprint") => GameMode::Sprint { target_lines },
            _ => GameMode::Endless,
        };

        let seed = lookup("BRICKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        Self {
            mode,
            seed,
            high_score_path: path("BRICKFALL_HIGH_SCORE_FILE", defaults.high_score_path),
            log_path: path("BRICKFALL_LOG_FILE", defaults.log_path),
        }
    }

    pub fn brick_source(&self) -> RandomBricks {
        match self.seed {
            Some(seed) => RandomBricks::seeded(seed),
            None => RandomBricks::from_entropy(),
        }
    }

    pub fn new_session(&self) -> GameSession {
        GameSession::new(self.mode, self.brick_source())
    }
}
