//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders a
//! [`core::RenderSnapshot`] into a framebuffer that is then flushed to the
//! terminal with crossterm.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure snapshot → framebuffer mapping
//! - [`renderer`]: terminal setup/teardown and row-diffed flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use brickfall_core as core;
pub use brickfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, VISIBLE_ROWS};
pub use renderer::TerminalRenderer;
