//! Batch settings for the headless simulator.

use crate::config::GameConfig;
use crate::constants::FRAME_INTERVAL_MS;

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Simulated wall-clock time per frame
    pub frame_ms: u64,

    /// Frames per run before it counts as timed out
    pub max_frames_per_run: u64,

    /// 0 = no console output, 1 = banner and report, 2 = also log every run
    pub verbosity: u8,

    /// World tuning under test
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            frame_ms: FRAME_INTERVAL_MS,
            // ~10 minutes of play at 60 FPS
            max_frames_per_run: 36_000,
            verbosity: 1,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small reproducible batch for quick tuning checks.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_frames_per_run: 3_600,
            ..Default::default()
        }
    }

    /// Whether the binary prints the banner and text report.
    pub fn prints_report(&self) -> bool {
        self.verbosity >= 1
    }

    /// Whether each finished run is logged.
    pub fn logs_runs(&self) -> bool {
        self.verbosity >= 2
    }
}
