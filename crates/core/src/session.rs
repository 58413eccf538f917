//! Game session - applies intents and enforces the mode rules
//!
//! The session owns the board, the brick queue and the score/level counters.
//! Everything an intent triggers (movement, and for downward intents the
//! lock → clear → score → win check → spawn cascade) happens inside one call to
//! [`GameSession::apply`], so a caller that serializes `apply` calls never sees a
//! half-applied intent.
//!
//! # Lifecycle
//!
//! ```text
//! Playing ⇄ Paused
//! Playing → GameOver   (next spawn collides)
//! Playing → Won        (sprint target reached)
//! any     → Playing    (NewGame)
//! ```

use crate::board::{Board, ClearResult};
use crate::bricks::spawn_shape;
use crate::rng::{BrickQueue, BrickSource, RandomBricks};
use crate::scoring::{soft_drop_points, LevelProgression, ScoreKeeper};
use crate::snapshot::{ActiveSnapshot, RenderSnapshot, SessionStats};
use crate::types::{GameMode, Intent, Source, Status, EMPTY_SHAPE};

/// Result of one applied intent.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentOutcome {
    pub snapshot: RenderSnapshot,
    /// Present exactly when the intent locked a piece (even if no line cleared).
    pub clear: Option<ClearResult>,
    pub leveled_up: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession<S = RandomBricks> {
    board: Board,
    queue: BrickQueue<S>,
    score: ScoreKeeper,
    progression: LevelProgression,
    mode: GameMode,
    status: Status,
}

impl<S: BrickSource> GameSession<S> {
    /// Create a session and spawn its first piece.
    pub fn new(mode: GameMode, source: S) -> Self {
        let mut session = Self {
            board: Board::new(),
            queue: BrickQueue::new(source),
            score: ScoreKeeper::new(),
            progression: LevelProgression::new(),
            mode,
            status: Status::Playing,
        };
        session.spawn_next();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for puzzle setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn queue(&self) -> &BrickQueue<S> {
        &self.queue
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn lines(&self) -> u32 {
        self.progression.lines()
    }

    pub fn speed_ms(&self) -> u32 {
        self.progression.speed_ms()
    }

    /// Apply one intent, including any lock/clear/spawn it triggers.
    ///
    /// Intents that the current status does not allow are ignored; the returned
    /// snapshot then simply reflects the unchanged state.
    pub fn apply(&mut self, intent: Intent, source: Source) -> IntentOutcome {
        let level_before = self.progression.level();
        let clear = self.process(intent, source);
        IntentOutcome {
            snapshot: self.snapshot(),
            clear,
            leveled_up: self.progression.level() > level_before,
        }
    }

    fn accepts(&self, source: Source) -> bool {
        match source {
            Source::User => self.status.can_accept_input(),
            Source::Timer => self.status.can_process_tick(),
        }
    }

    fn process(&mut self, intent: Intent, source: Source) -> Option<ClearResult> {
        match intent {
            Intent::NewGame => {
                self.new_game();
                None
            }
            Intent::Pause => {
                self.toggle_pause();
                None
            }
            _ if !self.accepts(source) => None,
            Intent::MoveLeft => {
                self.board.try_move(0, -1);
                None
            }
            Intent::MoveRight => {
                self.board.try_move(0, 1);
                None
            }
            Intent::Rotate => {
                self.board.try_rotate();
                None
            }
            Intent::MoveDown => {
                if self.board.try_move(1, 0) {
                    if source == Source::User {
                        self.score.add(soft_drop_points());
                    }
                    None
                } else {
                    Some(self.settle())
                }
            }
            Intent::HardDrop => {
                self.board.drop_to_floor();
                Some(self.settle())
            }
        }
    }

    /// Lock the active piece and run the post-lock cascade.
    fn settle(&mut self) -> ClearResult {
        self.board.lock_piece();
        let clear = self.board.clear_lines();

        if clear.lines_removed > 0 {
            self.score.add(clear.score_bonus);
            self.progression.add_lines(clear.lines_removed);
        }

        if let Some(target) = self.mode.sprint_target() {
            if self.progression.lines() >= target {
                self.status = Status::Won;
                return clear;
            }
        }

        self.spawn_next();
        clear
    }

    fn spawn_next(&mut self) {
        let kind = self.queue.take_next();
        if self.board.spawn(kind) {
            self.status = Status::GameOver;
        }
    }

    /// Reset grid, score and level, then spawn. Works from any status.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.score.reset();
        self.progression.reset();
        self.status = Status::Playing;
        self.spawn_next();
    }

    /// Toggle between playing and paused. Returns false in a terminal state.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            Status::Playing => Status::Paused,
            Status::Paused => Status::Playing,
            Status::GameOver | Status::Won => return false,
        };
        true
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            score: self.score.score(),
            level: self.progression.level(),
            lines: self.progression.lines(),
            speed_ms: self.progression.speed_ms(),
            status: self.status,
        }
    }

    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        out.grid = *self.board.grid();
        out.active = self.board.active().copied().map(ActiveSnapshot::from);
        out.ghost_row = if self.status.is_terminal() {
            None
        } else {
            self.board.ghost_row()
        };

        let [next, second_next] = self.queue.peek_preview();
        out.next = next;
        out.second_next = second_next;
        out.next_preview = next.map(|kind| *spawn_shape(kind)).unwrap_or(EMPTY_SHAPE);
        out.second_preview = second_next
            .map(|kind| *spawn_shape(kind))
            .unwrap_or(EMPTY_SHAPE);

        out.score = self.score.score();
        out.level = self.progression.level();
        out.lines = self.progression.lines();
        out.status = self.status;
        out.mode = self.mode;
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let mut s = RenderSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
