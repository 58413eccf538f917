//! Snapshot types handed to collaborators outside the session lock.
//!
//! A [`RenderSnapshot`] owns plain copies of everything a renderer needs. This is
//! the one place where state is copied; code inside the session works on
//! borrowed state.

use crate::board::ActivePiece;
use crate::types::{BrickKind, GameMode, Grid, ShapeMatrix, Status, BOARD_COLS, BOARD_ROWS, EMPTY_SHAPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: BrickKind,
    pub rotation: usize,
    pub shape: ShapeMatrix,
    pub row: i8,
    pub col: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            shape: *value.shape(),
            row: value.row,
            col: value.col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderSnapshot {
    pub grid: Grid,
    pub active: Option<ActiveSnapshot>,
    pub ghost_row: Option<i8>,
    pub next: Option<BrickKind>,
    pub second_next: Option<BrickKind>,
    /// Spawn orientation of `next`; all zeros when there is none.
    pub next_preview: ShapeMatrix,
    pub second_preview: ShapeMatrix,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub status: Status,
    pub mode: GameMode,
}

impl RenderSnapshot {
    /// Lines still needed to win a sprint, `None` in endless mode.
    pub fn lines_remaining(&self) -> Option<u32> {
        self.mode
            .sprint_target()
            .map(|target| target.saturating_sub(self.lines))
    }
}

impl Default for RenderSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; BOARD_COLS]; BOARD_ROWS],
            active: None,
            ghost_row: None,
            next: None,
            second_next: None,
            next_preview: EMPTY_SHAPE,
            second_preview: EMPTY_SHAPE,
            score: 0,
            level: 1,
            lines: 0,
            status: Status::Playing,
            mode: GameMode::Endless,
        }
    }
}

/// The session-level values collaborators observe as streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionStats {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub speed_ms: u32,
    pub status: Status,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            speed_ms: crate::scoring::speed_for_level(1),
            status: Status::Playing,
        }
    }
}
