//! Scoring module - score accumulation and the level/speed curve
//!
//! - A successful user-sourced downward step is worth [`SOFT_DROP_POINTS`]
//! - Clearing `n` lines at once is worth `50 * n^2` (1 -> 50, 2 -> 200, 3 -> 450, 4 -> 800)
//! - Level is `lines / 10 + 1`; the descent interval shrinks 30ms per level down to 100ms

use crate::types::{
    BASE_SPEED_MS, LINES_PER_LEVEL, LINE_CLEAR_BASE, MIN_SPEED_MS, SOFT_DROP_POINTS,
    SPEED_STEP_MS,
};

/// Bonus for clearing `lines` rows with a single lock.
pub fn line_clear_bonus(lines: u32) -> u32 {
    LINE_CLEAR_BASE.saturating_mul(lines.saturating_mul(lines))
}

/// Points for a manual downward step.
pub fn soft_drop_points() -> u32 {
    SOFT_DROP_POINTS
}

/// Level for a cumulative line count (1-based).
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Milliseconds between automatic descent ticks at `level`.
pub fn speed_for_level(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(SPEED_STEP_MS);
    BASE_SPEED_MS.saturating_sub(reduction).max(MIN_SPEED_MS)
}

/// Monotonic score counter. Only [`ScoreKeeper::reset`] lowers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreKeeper {
    score: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}

/// Cumulative cleared lines and the level derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgression {
    level: u32,
    lines: u32,
}

impl LevelProgression {
    pub fn new() -> Self {
        Self { level: 1, lines: 0 }
    }

    /// Add cleared lines. Returns true iff the level went up.
    pub fn add_lines(&mut self, lines: u32) -> bool {
        let previous = self.level;
        self.lines = self.lines.saturating_add(lines);
        self.level = level_for_lines(self.lines);
        self.level > previous
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Automatic descent interval for the current level.
    pub fn speed_ms(&self) -> u32 {
        speed_for_level(self.level)
    }

    pub fn reset(&mut self) {
        self.level = 1;
        self.lines = 0;
    }
}

impl Default for LevelProgression {
    fn default() -> Self {
        Self::new()
    }
}
