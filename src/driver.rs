//! Frame driver: input, one simulation step, render, pace.
//!
//! The driver is the only caller of `Session::step`, so no two steps ever
//! overlap. Returning from [`run`] (normally or through `?`) stops frames.

use crate::clock::Clock;
use crate::input::{apply_input, GameInput};
use crate::session::Session;
use crate::ui::Renderer;
use log::debug;
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};

/// Source of already-mapped player input.
pub trait InputSource {
    /// Next pending input, or `None` once the queue is drained for this frame.
    fn next_input(&mut self) -> io::Result<Option<GameInput>>;
}

/// Frame loop settings.
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    pub frame_interval: Duration,
    /// Stop after this many frames. `None` runs until the player quits.
    pub max_frames: Option<u64>,
}

/// Counters reported when the loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub games_over: u32,
}

/// Run frames until the player quits, `max_frames` is hit, or an I/O error.
pub fn run<R, C, I, V>(
    session: &mut Session<R>,
    clock: &C,
    input: &mut I,
    renderer: &mut V,
    config: DriverConfig,
) -> io::Result<RunSummary>
where
    R: Rng,
    C: Clock,
    I: InputSource,
    V: Renderer,
{
    let mut summary = RunSummary::default();

    loop {
        if config.max_frames.is_some_and(|max| summary.frames >= max) {
            break;
        }
        let frame_start = Instant::now();

        while let Some(action) = input.next_input()? {
            if !apply_input(session, action) {
                debug!("quit after {} frames", summary.frames);
                return Ok(summary);
            }
        }

        if session.tick(clock).is_some() {
            summary.games_over += 1;
        }
        renderer.render(session)?;
        summary.frames += 1;

        let elapsed = frame_start.elapsed();
        if elapsed < config.frame_interval {
            std::thread::sleep(config.frame_interval - elapsed);
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::GameConfig;
    use std::collections::VecDeque;

    /// Inputs keyed by the frame they arrive on.
    struct Scripted {
        frames: VecDeque<Vec<GameInput>>,
        pending: VecDeque<GameInput>,
        fail_on_frame: Option<usize>,
        frame: usize,
        draining: bool,
    }

    impl Scripted {
        fn new(frames: Vec<Vec<GameInput>>) -> Self {
            Self {
                frames: frames.into(),
                pending: VecDeque::new(),
                fail_on_frame: None,
                frame: 0,
                draining: false,
            }
        }
    }

    impl InputSource for Scripted {
        fn next_input(&mut self) -> io::Result<Option<GameInput>> {
            if !self.draining {
                if self.fail_on_frame == Some(self.frame) {
                    return Err(io::Error::new(io::ErrorKind::Other, "input closed"));
                }
                self.draining = true;
                if let Some(next) = self.frames.pop_front() {
                    self.pending.extend(next);
                }
            }
            match self.pending.pop_front() {
                Some(action) => Ok(Some(action)),
                None => {
                    self.draining = false;
                    self.frame += 1;
                    Ok(None)
                }
            }
        }
    }

    /// Renderer that records the bird height each frame and advances the clock.
    struct Recorder<'a> {
        clock: &'a ManualClock,
        heights: Vec<f64>,
    }

    impl Renderer for Recorder<'_> {
        fn render<R: Rng>(&mut self, session: &Session<R>) -> io::Result<()> {
            self.heights.push(session.current_state().bird_y);
            self.clock.advance(16);
            Ok(())
        }
    }

    fn fast(max_frames: Option<u64>) -> DriverConfig {
        DriverConfig {
            frame_interval: Duration::ZERO,
            max_frames,
        }
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut session = Session::seeded(GameConfig::default(), 5);
        let clock = ManualClock::new(0);
        let mut input = Scripted::new(vec![vec![], vec![], vec![GameInput::Quit]]);
        let mut renderer = Recorder {
            clock: &clock,
            heights: Vec::new(),
        };

        let summary = run(&mut session, &clock, &mut input, &mut renderer, fast(None)).unwrap();
        assert_eq!(summary.frames, 2);
        assert_eq!(renderer.heights.len(), 2);
    }

    #[test]
    fn test_flap_starts_game_and_rises() {
        let mut session = Session::seeded(GameConfig::default(), 5);
        let clock = ManualClock::new(0);
        // Pending inputs are drained before the first step.
        let mut input = Scripted::new(vec![]);
        input.pending.push_back(GameInput::Flap);
        let mut renderer = Recorder {
            clock: &clock,
            heights: Vec::new(),
        };

        run(&mut session, &clock, &mut input, &mut renderer, fast(Some(3))).unwrap();
        assert!((renderer.heights[0] - 288.0).abs() < 1e-9);
        assert!(renderer.heights[1] < renderer.heights[0]);
    }

    #[test]
    fn test_game_over_counted() {
        let mut session = Session::seeded(GameConfig::default(), 5);
        session.start_session();
        let clock = ManualClock::new(0);
        let mut input = Scripted::new(vec![]);
        let mut renderer = Recorder {
            clock: &clock,
            heights: Vec::new(),
        };

        let summary = run(&mut session, &clock, &mut input, &mut renderer, fast(Some(60))).unwrap();
        assert_eq!(summary.frames, 60);
        assert_eq!(summary.games_over, 1);
        assert!(session.current_state().is_game_over());
    }

    #[test]
    fn test_input_error_propagates() {
        let mut session = Session::seeded(GameConfig::default(), 5);
        let clock = ManualClock::new(0);
        let mut input = Scripted::new(vec![]);
        input.fail_on_frame = Some(1);
        let mut renderer = Recorder {
            clock: &clock,
            heights: Vec::new(),
        };

        let err = run(&mut session, &clock, &mut input, &mut renderer, fast(None)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(renderer.heights.len(), 1);
    }
}
