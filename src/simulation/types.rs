//! Flappy Bird simulation data structures.

use crate::config::GameConfig;
use serde::{Deserialize, Serialize};

/// Session phase. Idle is the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    GameOver,
}

/// A single pipe obstacle (top + bottom barrier with a gap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Spawn timestamp in milliseconds. Unique because spawns are rate limited.
    pub id: u64,
    /// Leading (left) edge.
    pub x: f64,
    /// Top of the passable gap.
    pub gap_y: f64,
    /// Whether the bird has been credited for this pipe. Never reset.
    pub passed: bool,
}

impl Obstacle {
    /// Right edge (exclusive).
    pub fn right(&self, config: &GameConfig) -> f64 {
        self.x + config.pipe_width
    }

    /// Bottom of the gap (exclusive).
    pub fn gap_bottom(&self, config: &GameConfig) -> f64 {
        self.gap_y + config.gap_height
    }
}

/// Complete simulation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    /// Pipes passed this session.
    pub score: u32,
    /// Top edge of the bird. Row 0 = ceiling, grows downward.
    pub bird_y: f64,
    /// Vertical speed per frame (positive = downward).
    pub bird_velocity: f64,
    /// Spawn order, which is also left-to-right order.
    pub pipes: Vec<Obstacle>,
    /// Wall-clock time of the most recent spawn.
    pub last_spawn_ms: u64,
}

impl GameState {
    /// Idle state with the bird at its start height.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            bird_y: config.bird_start_y,
            bird_velocity: 0.0,
            pipes: Vec::new(),
            last_spawn_ms: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}

/// Per-frame inputs supplied by the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInput {
    /// Wall-clock time of this frame in milliseconds.
    pub now_ms: u64,
    /// Whether a flap was requested since the previous frame.
    pub impulse: bool,
}

/// Why the bird crashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Ground,
    Ceiling,
    Pipe,
}

/// Result of one simulation step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub state: GameState,
    /// Set only on the frame that transitions to game over.
    pub game_over: Option<GameOverInfo>,
}

/// Terminal notification payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverInfo {
    pub final_score: u32,
    pub cause: CrashCause,
}
