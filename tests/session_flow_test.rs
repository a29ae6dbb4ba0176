//! Integration test: session lifecycle
//!
//! Walks a session through idle -> playing -> game over -> reset the way a
//! frame driver would, and runs the real driver loop against a test backend.

use flappy::clock::ManualClock;
use flappy::driver::{self, DriverConfig, InputSource};
use flappy::input::GameInput;
use flappy::simulation::CrashCause;
use flappy::ui::TerminalRenderer;
use flappy::{GameConfig, Phase, Session};
use ratatui::backend::TestBackend;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

fn collect_game_overs(session: &mut Session) -> Rc<RefCell<Vec<u32>>> {
    let scores = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&scores);
    session.on_game_over(move |score| sink.borrow_mut().push(score));
    scores
}

/// Play with no flaps until the bird hits the ground.
fn fall_to_ground(session: &mut Session, clock: &ManualClock) -> Option<u32> {
    for _ in 0..200 {
        clock.advance(16);
        if let Some(score) = session.tick(clock) {
            return Some(score);
        }
    }
    None
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_idle_start_flap_scenario() {
    let mut session = Session::seeded(GameConfig::default(), 42);

    let idle = session.current_state();
    assert_eq!(idle.phase, Phase::Idle);
    assert_eq!(idle.bird_y, 300.0);
    assert_eq!(idle.bird_velocity, 0.0);
    assert!(idle.pipes.is_empty());
    assert_eq!(idle.score, 0);

    session.start_session();
    assert_eq!(session.current_state().phase, Phase::Playing);

    assert_eq!(session.step(16), None);
    let state = session.current_state();
    assert!((state.bird_y - 300.6).abs() < 1e-9);
    assert!((state.bird_velocity - 0.6).abs() < 1e-9);

    let before = state.bird_y;
    session.request_impulse();
    assert_eq!(session.step(32), None);
    let state = session.current_state();
    assert_eq!(state.bird_velocity, -12.0);
    assert!((before - state.bird_y - 12.0).abs() < 1e-9);
}

#[test]
fn test_idle_steps_do_nothing() {
    let mut session = Session::seeded(GameConfig::default(), 1);
    let idle = session.current_state().clone();
    for now in (16..1_000).step_by(16) {
        assert_eq!(session.step(now), None);
    }
    assert_eq!(session.current_state(), &idle);
}

#[test]
fn test_game_over_notifies_once_then_reset() {
    let mut session = Session::seeded(GameConfig::default(), 7);
    let scores = collect_game_overs(&mut session);
    let clock = ManualClock::new(0);

    session.start_session();
    assert_eq!(fall_to_ground(&mut session, &clock), Some(0));
    assert_eq!(session.last_crash(), Some(CrashCause::Ground));
    assert_eq!(session.current_state().phase, Phase::GameOver);

    let frozen = session.current_state().clone();
    for _ in 0..20 {
        clock.advance(16);
        assert_eq!(session.tick(&clock), None);
    }
    assert_eq!(session.current_state(), &frozen);
    assert_eq!(*scores.borrow(), vec![0]);

    session.reset_session();
    let state = session.current_state();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.bird_y, 300.0);
    assert_eq!(state.score, 0);
    assert!(state.pipes.is_empty());
    assert!(!session.impulse_pending());
    assert_eq!(session.last_crash(), None);
}

#[test]
fn test_flap_after_game_over_restarts_from_idle() {
    let mut session = Session::seeded(GameConfig::default(), 9);
    let scores = collect_game_overs(&mut session);
    let clock = ManualClock::new(0);

    session.request_impulse();
    assert_eq!(session.current_state().phase, Phase::Playing);
    assert_eq!(fall_to_ground(&mut session, &clock), Some(0));

    // First flap resets, second one starts a new game.
    session.request_impulse();
    assert_eq!(session.current_state().phase, Phase::Idle);
    session.request_impulse();
    assert_eq!(session.current_state().phase, Phase::Playing);

    assert_eq!(fall_to_ground(&mut session, &clock), Some(0));
    assert_eq!(*scores.borrow(), vec![0, 0]);
}

// =============================================================================
// Frame driver
// =============================================================================

/// Queued inputs, all delivered on the first frame.
struct OneShot {
    queued: VecDeque<GameInput>,
}

impl InputSource for OneShot {
    fn next_input(&mut self) -> io::Result<Option<GameInput>> {
        Ok(self.queued.pop_front())
    }
}

#[test]
fn test_driver_runs_a_game_to_the_game_over_screen() {
    let mut session = Session::seeded(GameConfig::default(), 5);
    let scores = collect_game_overs(&mut session);
    let clock = ManualClock::new(0);
    let mut input = OneShot {
        queued: VecDeque::from([GameInput::Flap]),
    };
    let mut renderer = TerminalRenderer::new(TestBackend::new(80, 30)).unwrap();

    let summary = driver::run(
        &mut session,
        &clock,
        &mut input,
        &mut renderer,
        DriverConfig {
            frame_interval: Duration::ZERO,
            max_frames: Some(120),
        },
    )
    .unwrap();

    assert_eq!(summary.frames, 120);
    assert_eq!(summary.games_over, 1);
    assert_eq!(*scores.borrow(), vec![0]);

    let text: String = renderer
        .terminal()
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("GAME OVER"));
}

#[test]
fn test_driver_stops_on_quit() {
    let mut session = Session::seeded(GameConfig::default(), 5);
    let clock = ManualClock::new(0);
    let mut input = OneShot {
        queued: VecDeque::from([GameInput::Flap, GameInput::Quit]),
    };
    let mut renderer = TerminalRenderer::new(TestBackend::new(80, 30)).unwrap();

    let summary = driver::run(
        &mut session,
        &clock,
        &mut input,
        &mut renderer,
        DriverConfig {
            frame_interval: Duration::ZERO,
            max_frames: None,
        },
    )
    .unwrap();

    assert_eq!(summary.frames, 0);
    assert_eq!(session.current_state().phase, Phase::Playing);
}
