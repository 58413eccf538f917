//! Brickfall (workspace facade crate).
//!
//! Re-exports the member crates under short names so binaries, integration
//! tests and benchmarks can use `brickfall::{core, engine, input, term, types}`.

pub use brickfall_core as core;
pub use brickfall_engine as engine;
pub use brickfall_input as input;
pub use brickfall_term as term;
pub use brickfall_types as types;
