//! Integration tests for whole games played through the public API.

use std::time::Duration;

use brickfall::core::{GameSession, RandomBricks, ScriptedBricks};
use brickfall::engine::{FileStore, GravityDriver, HighScore, MemoryStore, SharedSession};
use brickfall::types::{BrickKind, GameMode, Intent, Source, Status, BOARD_COLS};

/// A fixed, varied intent script.
fn scripted_intent(step: usize) -> Intent {
    match step % 11 {
        0 | 5 => Intent::MoveLeft,
        1 | 7 => Intent::MoveRight,
        2 | 8 => Intent::Rotate,
        3 | 6 | 9 => Intent::MoveDown,
        _ => Intent::HardDrop,
    }
}

#[test]
fn test_game_lifecycle() {
    let mut session = GameSession::new(GameMode::Endless, RandomBricks::seeded(12345));
    assert_eq!(session.status(), Status::Playing);
    assert!(session.board().active().is_some());

    let mut last_score = 0;
    let mut steps = 0;
    while session.status() == Status::Playing && steps < 10_000 {
        let outcome = session.apply(Intent::HardDrop, Source::User);
        assert!(outcome.clear.is_some());
        assert!(session.score() >= last_score);
        last_score = session.score();
        steps += 1;
    }
    // Hard drops at the spawn column stack up until a spawn collides.
    assert_eq!(session.status(), Status::GameOver);

    session.apply(Intent::NewGame, Source::User);
    assert_eq!(session.status(), Status::Playing);
    assert_eq!(session.score(), 0);
    assert!(session.board().grid().iter().all(|row| row.iter().all(|&c| c == 0)));
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = GameSession::new(GameMode::Endless, RandomBricks::seeded(7));
    let mut b = GameSession::new(GameMode::Endless, RandomBricks::seeded(7));
    for step in 0..500 {
        let intent = scripted_intent(step);
        let left = a.apply(intent, Source::User);
        let right = b.apply(intent, Source::User);
        assert_eq!(left, right, "diverged at step {}", step);
    }
}

#[test]
fn test_invariants_hold_through_random_play() {
    let mut session = GameSession::new(GameMode::Endless, RandomBricks::seeded(99));
    for step in 0..3_000 {
        let source = if step % 4 == 0 { Source::Timer } else { Source::User };
        let outcome = session.apply(scripted_intent(step), source);

        // No full row survives an applied intent.
        for row in session.board().grid() {
            assert!(row.contains(&0), "full row left at step {}", step);
        }
        assert_eq!(session.level(), session.lines() / 10 + 1);
        if let Some(clear) = outcome.clear {
            assert_eq!(clear.score_bonus, 50 * clear.lines_removed * clear.lines_removed);
        }
        if session.status() == Status::GameOver {
            session.apply(Intent::NewGame, Source::User);
        }
    }
}

#[test]
fn test_sprint_mode_finishes_with_a_win() {
    let mut session = GameSession::new(
        GameMode::Sprint { target_lines: 2 },
        ScriptedBricks::repeat(BrickKind::I),
    );
    for row in 23..25 {
        for col in (0..4).chain(8..BOARD_COLS as i8) {
            session.board_mut().set_cell(row, col, 2);
        }
    }
    session.apply(Intent::HardDrop, Source::User);
    assert_eq!(session.snapshot().lines_remaining(), Some(1));
    session.apply(Intent::HardDrop, Source::User);

    let snap = session.snapshot();
    assert_eq!(snap.status, Status::Won);
    assert_eq!(snap.lines_remaining(), Some(0));
    assert!(snap.active.is_none());

    // Timer ticks after the win change nothing.
    let before = session.snapshot();
    session.apply(Intent::MoveDown, Source::Timer);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_timer_is_ignored_while_paused() {
    let mut session = GameSession::new(GameMode::Endless, ScriptedBricks::repeat(BrickKind::T));
    session.apply(Intent::Pause, Source::User);
    let before = session.snapshot();
    for _ in 0..50 {
        session.apply(Intent::MoveDown, Source::Timer);
    }
    assert_eq!(session.snapshot(), before);

    session.apply(Intent::Pause, Source::User);
    session.apply(Intent::MoveDown, Source::Timer);
    assert_eq!(session.board().active().unwrap().row, 1);
}

#[test]
fn test_game_over_records_high_score_file() {
    let path = std::env::temp_dir().join(format!("brickfall-it-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let high_score = HighScore::load(FileStore::new(&path));
    assert_eq!(high_score.best(), 0);
    let shared = SharedSession::new(
        GameSession::new(GameMode::Endless, ScriptedBricks::repeat(BrickKind::O)),
        high_score,
    );

    // Soft drops score a point per row until the stack reaches the spawn.
    let mut steps = 0;
    while shared.stats().status == Status::Playing && steps < 10_000 {
        shared.dispatch(Intent::MoveDown, Source::User);
        steps += 1;
    }
    let stats = shared.stats();
    assert_eq!(stats.status, Status::GameOver);
    assert!(stats.score > 0);
    assert_eq!(shared.high_score(), stats.score);

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["high_score"], stats.score);

    // A fresh keeper reads the stored best back.
    assert_eq!(HighScore::load(FileStore::new(&path)).best(), stats.score);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_lower_score_keeps_existing_best() {
    let store = MemoryStore::with_value(10_000);
    let shared = SharedSession::new(
        GameSession::new(GameMode::Endless, ScriptedBricks::repeat(BrickKind::I)),
        HighScore::load(store.clone()),
    );
    for _ in 0..40 {
        shared.dispatch(Intent::MoveDown, Source::User);
    }
    assert!(shared.stats().score > 0);
    assert_eq!(shared.high_score(), 10_000);
    assert_eq!(store.value(), 10_000);
}

#[tokio::test(start_paused = true)]
async fn test_gravity_alone_plays_a_game_to_the_end() {
    let shared = SharedSession::new(
        GameSession::new(GameMode::Endless, ScriptedBricks::repeat(BrickKind::O)),
        HighScore::load(MemoryStore::new()),
    );
    let mut rx = shared.subscribe();
    let driver = GravityDriver::spawn(shared.clone());

    let ended = tokio::time::timeout(Duration::from_secs(600), async {
        while rx.borrow_and_update().status == Status::Playing {
            if rx.changed().await.is_err() {
                break;
            }
        }
    })
    .await;
    assert!(ended.is_ok());
    assert_eq!(shared.stats().status, Status::GameOver);
    // Timer descent never scores.
    assert_eq!(shared.stats().score, 0);

    // The driver parks but keeps running; a new game starts falling again.
    shared.dispatch(Intent::NewGame, Source::User);
    tokio::time::sleep(Duration::from_millis(401)).await;
    assert_eq!(shared.snapshot().active.unwrap().row, 1);
    driver.stop();
}
