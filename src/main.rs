//! Brickfall terminal runner (default binary).
//!
//! The gravity driver runs on a tokio runtime in the background; the main
//! thread polls crossterm for keys and redraws. Both dispatch through the same
//! `SharedSession`.

use std::fs::File;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use brickfall::core::RenderSnapshot;
use brickfall::engine::{FileStore, GameConfig, GravityDriver, HighScore, SharedSession};
use brickfall::input::{handle_key_event, should_quit};
use brickfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use brickfall::types::Source;

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    let _guard = runtime.enter();

    let high_score = HighScore::load(FileStore::new(&config.high_score_path));
    let session = SharedSession::new(config.new_session(), high_score);
    info!(
        "starting {} game, high score {}",
        config.mode.as_str(),
        session.high_score()
    );
    let driver = GravityDriver::spawn(session.clone());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &session);

    // Always try to restore terminal state.
    let _ = term.exit();
    driver.stop();
    info!("exiting with score {}", session.stats().score);
    result
}

/// Log to a file so output never lands on the alternate screen.
fn init_logging(config: &GameConfig) -> Result<()> {
    let file = File::create(&config.log_path)
        .with_context(|| format!("cannot open log file {}", config.log_path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &SharedSession) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = RenderSnapshot::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, session.high_score(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(FRAME_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(intent) = handle_key_event(key) {
                    session.dispatch(intent, Source::User);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
