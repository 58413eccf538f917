//! Shared session handle.
//!
//! Every intent from every source goes through [`SharedSession::dispatch`],
//! which holds one mutex for the whole intent including its lock/clear/spawn
//! cascade. Stats are published on a watch channel before the lock is released,
//! so observers see them in the order intents were applied. The high score is
//! offered after the lock is released, using the score read under it. Inside a
//! tokio runtime the offer runs on the blocking pool, since saving may touch the
//! filesystem.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info};
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::core::{BrickSource, GameSession, IntentOutcome, RandomBricks, RenderSnapshot, SessionStats};
use crate::high_score::HighScore;
use crate::types::{Intent, Source, Status};

pub struct SharedSession<S = RandomBricks> {
    session: Arc<Mutex<GameSession<S>>>,
    high_score: Arc<Mutex<HighScore>>,
    stats: Arc<watch::Sender<SessionStats>>,
}

impl<S> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            high_score: Arc::clone(&self.high_score),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<S: BrickSource> SharedSession<S> {
    pub fn new(session: GameSession<S>, high_score: HighScore) -> Self {
        let (stats, _) = watch::channel(session.stats());
        Self {
            session: Arc::new(Mutex::new(session)),
            high_score: Arc::new(Mutex::new(high_score)),
            stats: Arc::new(stats),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameSession<S>> {
        self.session.lock().expect("session mutex poisoned")
    }

    fn publish(&self, stats: SessionStats) {
        self.stats.send_if_modified(|current| {
            if *current == stats {
                return false;
            }
            *current = stats;
            true
        });
    }

    /// Apply one intent atomically with respect to every other dispatch.
    pub fn dispatch(&self, intent: Intent, source: Source) -> IntentOutcome {
        let (before, outcome, stats) = {
            let mut session = self.lock();
            let before = session.status();
            let outcome = session.apply(intent, source);
            let stats = session.stats();
            self.publish(stats);
            (before, outcome, stats)
        };

        if outcome.leveled_up {
            info!("level {} reached, descent every {}ms", stats.level, stats.speed_ms);
        }
        if stats.status != before {
            match stats.status {
                Status::GameOver => info!("game over: score {}, lines {}", stats.score, stats.lines),
                Status::Won => info!("sprint won: score {}, lines {}", stats.score, stats.lines),
                _ => debug!("status {} -> {}", before.name(), stats.status.name()),
            }
        }

        let cleared = outcome
            .clear
            .as_ref()
            .map_or(false, |clear| clear.lines_removed > 0);
        let ended = stats.status.is_terminal() && !before.is_terminal();
        if cleared || ended {
            self.offer_high_score(stats.score);
        }

        outcome
    }

    /// Run `f` against the locked session, then publish the resulting stats.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut GameSession<S>) -> R) -> R {
        let mut session = self.lock();
        let result = f(&mut session);
        self.publish(session.stats());
        result
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.lock().snapshot()
    }

    /// Copy the current snapshot into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        self.lock().snapshot_into(out);
    }

    pub fn stats(&self) -> SessionStats {
        *self.stats.borrow()
    }

    /// Stream of score, level, lines and status changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionStats> {
        self.stats.subscribe()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.lock().expect("high score mutex poisoned").best()
    }

    fn offer_high_score(&self, score: u32) {
        let high_score = Arc::clone(&self.high_score);
        let offer = move || {
            high_score
                .lock()
                .expect("high score mutex poisoned")
                .check_and_update(score);
        };
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(offer);
            }
            Err(_) => offer(),
        }
    }
}
