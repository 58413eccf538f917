//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state machine. It has **no
//! dependencies** on terminals, clocks, threads or files:
//!
//! - **Deterministic**: the brick source is injected, so a seed or a script
//!   reproduces a game exactly
//! - **Allocation-free hot paths**: grids and shapes are fixed-size arrays
//! - **Synchronous**: callers that share a session serialize access themselves
//!
//! # Module Structure
//!
//! - [`bricks`]: the seven kinds and their authored rotation states
//! - [`matrix`]: collision, merge and line-clear as free functions
//! - [`rng`]: injectable brick source and the lookahead queue
//! - [`board`]: grid plus active piece, movement, rotation with kicks, locking
//! - [`scoring`]: score counter, level progression and the speed curve
//! - [`session`]: intent processing and the endless/sprint rules
//! - [`snapshot`]: owned copies handed to renderers and observers
//!
//! # Rules
//!
//! - Uniform random kinds, no 7-bag
//! - Rotation advances through a fixed list of states and tries five kick
//!   offsets in a fixed order
//! - Clearing `n` lines at once scores `50 * n^2`; a user soft drop scores 1
//! - Level is `lines / 10 + 1`; descent interval is `max(100, 400 - 30 * (level - 1))` ms
//!
//! # Example
//!
//! ```
//! use brickfall_core::{GameSession, RandomBricks};
//! use brickfall_types::{GameMode, Intent, Source, Status};
//!
//! let mut game = GameSession::new(GameMode::Endless, RandomBricks::seeded(12345));
//!
//! game.apply(Intent::MoveRight, Source::User);
//! game.apply(Intent::Rotate, Source::User);
//! let outcome = game.apply(Intent::HardDrop, Source::User);
//!
//! assert!(outcome.clear.is_some());
//! assert_eq!(game.status(), Status::Playing);
//! ```

pub mod board;
pub mod bricks;
pub mod matrix;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use brickfall_types as types;

// Re-export commonly used types for convenience
pub use board::{ActivePiece, Board, ClearResult};
pub use rng::{BrickQueue, BrickSource, RandomBricks, ScriptedBricks};
pub use scoring::{line_clear_bonus, speed_for_level, LevelProgression, ScoreKeeper};
pub use session::{GameSession, IntentOutcome};
pub use snapshot::{ActiveSnapshot, RenderSnapshot, SessionStats};
