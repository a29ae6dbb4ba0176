//! Pipe scrolling, pruning, spawning and scoring.

use super::types::Obstacle;
use crate::config::GameConfig;
use log::debug;
use rand::Rng;

/// Result of advancing the pipe stream by one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleUpdate {
    pub pipes: Vec<Obstacle>,
    pub last_spawn_ms: u64,
    /// Pipes credited this frame. Each pipe is credited at most once.
    pub newly_passed: u32,
}

/// Whether enough wall-clock time has gone by to spawn another pipe.
pub fn spawn_due(now_ms: u64, last_spawn_ms: u64, config: &GameConfig) -> bool {
    now_ms.saturating_sub(last_spawn_ms) >= config.spawn_interval_ms
}

/// Pick the gap top for a new pipe, uniform in `[gap_y_min, gap_y_max)`.
///
/// Without a random source the gap sits at the midpoint of the range.
pub fn roll_gap_y<R: Rng + ?Sized>(config: &GameConfig, rng: Option<&mut R>) -> f64 {
    match rng {
        Some(rng) if config.gap_y_min < config.gap_y_max => {
            rng.gen_range(config.gap_y_min..config.gap_y_max)
        }
        _ => config.gap_y_midpoint(),
    }
}

/// Advance the pipe stream one frame.
///
/// Order matters: scroll, prune, spawn, then credit passes. Crediting runs
/// before the caller's collision test.
pub fn advance_obstacles<R: Rng + ?Sized>(
    pipes: &[Obstacle],
    now_ms: u64,
    last_spawn_ms: u64,
    config: &GameConfig,
    rng: Option<&mut R>,
) -> ObstacleUpdate {
    let mut next: Vec<Obstacle> = pipes
        .iter()
        .map(|pipe| Obstacle {
            x: pipe.x - config.pipe_speed,
            ..pipe.clone()
        })
        .collect();

    // Pipes only leave from the front; all share one speed and spawn x.
    next.retain(|pipe| pipe.x > -config.pipe_width);

    let mut last_spawn_ms = last_spawn_ms;
    if spawn_due(now_ms, last_spawn_ms, config) {
        let gap_y = roll_gap_y(config, rng);
        debug!("spawning pipe {} with gap at {:.1}", now_ms, gap_y);
        next.push(Obstacle {
            id: now_ms,
            x: config.pipe_spawn_x,
            gap_y,
            passed: false,
        });
        last_spawn_ms = now_ms;
    }

    let score_line = config.score_line();
    let mut newly_passed = 0;
    for pipe in &mut next {
        if !pipe.passed && pipe.x < score_line {
            pipe.passed = true;
            newly_passed += 1;
        }
    }

    ObstacleUpdate {
        pipes: next,
        last_spawn_ms,
        newly_passed,
    }
}
