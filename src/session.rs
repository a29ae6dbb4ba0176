//! One play session: the object the frame driver and renderer talk to.
//!
//! The session owns the state snapshot, the pending flap flag and the random
//! source. The frame driver calls [`Session::step`] once per frame; the
//! renderer reads [`Session::current_state`]. Flap requests are a single
//! level-triggered flag, so several presses between two frames flap once.

use crate::clock::Clock;
use crate::config::GameConfig;
use crate::simulation::{self, CrashCause, GameState, Phase, StepInput};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

type GameOverListener = Box<dyn FnMut(u32)>;

pub struct Session<R: Rng = ChaCha8Rng> {
    config: GameConfig,
    state: GameState,
    rng: Option<R>,
    impulse_pending: bool,
    best_score: u32,
    last_crash: Option<CrashCause>,
    listeners: Vec<GameOverListener>,
}

impl Session<ChaCha8Rng> {
    /// Session with a reproducible pipe sequence.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, Some(ChaCha8Rng::seed_from_u64(seed)))
    }

    /// Session seeded from OS entropy.
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::new(config, Some(ChaCha8Rng::from_entropy()))
    }
}

impl<R: Rng> Session<R> {
    /// Create an idle session. Without a random source every gap sits at the
    /// midpoint of the configured range.
    pub fn new(config: GameConfig, rng: Option<R>) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            rng,
            impulse_pending: false,
            best_score: 0,
            last_crash: None,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only snapshot for rendering.
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    /// Best score since the process started. Never written to disk.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// What ended the most recent session, if it has ended.
    pub fn last_crash(&self) -> Option<CrashCause> {
        self.last_crash
    }

    /// Whether a flap is waiting for the next frame.
    pub fn impulse_pending(&self) -> bool {
        self.impulse_pending
    }

    /// Register a callback fired once per game over with the final score.
    pub fn on_game_over<F: FnMut(u32) + 'static>(&mut self, listener: F) {
        self.listeners.push(Box::new(listener));
    }

    /// Idle -> Playing. Ignored in any other phase.
    pub fn start_session(&mut self) {
        if self.state.phase != Phase::Idle {
            return;
        }
        self.state.phase = Phase::Playing;
        info!("session started");
    }

    /// Back to idle defaults. The best score survives.
    pub fn reset_session(&mut self) {
        self.state = GameState::new(&self.config);
        self.impulse_pending = false;
        self.last_crash = None;
        info!("session reset");
    }

    /// Flap input.
    ///
    /// Starts the session (with a flap) when idle, resets it when the game
    /// is over, otherwise flaps on the next frame.
    pub fn request_impulse(&mut self) {
        match self.state.phase {
            Phase::Idle => {
                self.start_session();
                self.impulse_pending = true;
            }
            Phase::Playing => self.impulse_pending = true,
            Phase::GameOver => self.reset_session(),
        }
    }

    /// Advance one frame at wall-clock time `now_ms`.
    ///
    /// Returns the final score on the frame the bird crashes, `None` on every
    /// other frame. Does nothing outside `Playing`.
    pub fn step(&mut self, now_ms: u64) -> Option<u32> {
        let impulse = std::mem::take(&mut self.impulse_pending);
        if !self.state.is_playing() {
            return None;
        }

        let input = StepInput { now_ms, impulse };
        let outcome = simulation::step(&self.state, input, &self.config, self.rng.as_mut());
        self.state = outcome.state;

        let info = outcome.game_over?;
        self.best_score = self.best_score.max(info.final_score);
        self.last_crash = Some(info.cause);
        info!(
            "game over ({:?}) with score {}, best {}",
            info.cause, info.final_score, self.best_score
        );
        for listener in &mut self.listeners {
            listener(info.final_score);
        }
        Some(info.final_score)
    }

    /// Advance one frame using `clock` for the timestamp.
    pub fn tick(&mut self, clock: &impl Clock) -> Option<u32> {
        self.step(clock.now_ms())
    }
}

impl<R: Rng> fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("impulse_pending", &self.impulse_pending)
            .field("best_score", &self.best_score)
            .field("last_crash", &self.last_crash)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
