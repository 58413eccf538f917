//! Runtime collaborators around the deterministic core.
//!
//! - [`shared`]: the mutex boundary every intent source goes through
//! - [`gravity`]: the periodic TIMER source, a tokio task
//! - [`high_score`]: best score in memory plus a durable store
//! - [`config`]: environment-driven settings

pub mod config;
pub mod gravity;
pub mod high_score;
pub mod shared;

pub use brickfall_core as core;
pub use brickfall_types as types;

pub use config::GameConfig;
pub use gravity::GravityDriver;
pub use high_score::{FileStore, HighScore, HighScoreStore, MemoryStore, StoreError};
pub use shared::SharedSession;
