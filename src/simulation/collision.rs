//! Bird-vs-bounds and bird-vs-pipe overlap.

use super::types::{CrashCause, Obstacle};
use crate::config::GameConfig;

/// Classify what the bird at `bird_y` is touching, if anything.
///
/// Bounds are checked first, then pipes in order; the first hit wins.
pub fn crash_cause(bird_y: f64, pipes: &[Obstacle], config: &GameConfig) -> Option<CrashCause> {
    if bird_y > config.ground_y {
        return Some(CrashCause::Ground);
    }
    if bird_y < 0.0 {
        return Some(CrashCause::Ceiling);
    }

    let bird_left = config.bird_x;
    let bird_right = config.bird_x + config.bird_size;
    let bird_bottom = bird_y + config.bird_size;

    pipes
        .iter()
        .filter(|pipe| pipe.x < bird_right && pipe.right(config) > bird_left)
        .any(|pipe| bird_y < pipe.gap_y || bird_bottom > pipe.gap_bottom(config))
        .then_some(CrashCause::Pipe)
}

/// Whether the bird at `bird_y` collides with the bounds or any pipe.
pub fn collides(bird_y: f64, pipes: &[Obstacle], config: &GameConfig) -> bool {
    crash_cause(bird_y, pipes, config).is_some()
}
