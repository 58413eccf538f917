//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]. It knows nothing
//! about sessions; callers tag the intent with `Source::User` and dispatch it.

pub mod map;

pub use brickfall_types as types;

pub use map::{handle_key_event, should_quit};
