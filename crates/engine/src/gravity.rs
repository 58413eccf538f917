//! Automatic descent.
//!
//! The driver is the TIMER intent source: a tokio task that dispatches
//! `MoveDown` every `speed_ms` while the session can process ticks. It follows
//! the stats stream, re-arming its deadline whenever the speed or the status
//! changes, and parks on the stream while paused or finished.

use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::core::BrickSource;
use crate::shared::SharedSession;
use crate::types::{Intent, Source};

fn interval(speed_ms: u32) -> Duration {
    Duration::from_millis(u64::from(speed_ms))
}

pub struct GravityDriver {
    handle: JoinHandle<()>,
}

impl GravityDriver {
    /// Spawn the driver on the current tokio runtime.
    pub fn spawn<S>(session: SharedSession<S>) -> Self
    where
        S: BrickSource + Send + 'static,
    {
        Self {
            handle: tokio::spawn(run(session)),
        }
    }

    /// Cancel automatic descent. In-flight intents are never interrupted since
    /// dispatch does not await.
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for GravityDriver {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run<S>(session: SharedSession<S>)
where
    S: BrickSource + Send + 'static,
{
    let mut rx = session.subscribe();
    let mut armed = *rx.borrow_and_update();
    let mut deadline = Instant::now() + interval(armed.speed_ms);

    loop {
        let current = *rx.borrow_and_update();
        if current.speed_ms != armed.speed_ms || current.status != armed.status {
            deadline = Instant::now() + interval(current.speed_ms);
            debug!(
                "gravity re-armed: {}ms, {}",
                current.speed_ms,
                current.status.name()
            );
        }
        armed = current;

        if !armed.status.can_process_tick() {
            if rx.changed().await.is_err() {
                return;
            }
            continue;
        }

        tokio::select! {
            _ = time::sleep_until(deadline) => {
                session.dispatch(Intent::MoveDown, Source::Timer);
                deadline = Instant::now() + interval(armed.speed_ms);
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    return;
                }
            }
        }
    }
}
