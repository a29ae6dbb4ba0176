//! Scripted player for headless runs.

use crate::config::GameConfig;
use crate::simulation::GameState;

/// How far above the gap bottom the bird's bottom edge may sink before flapping.
const GAP_BOTTOM_MARGIN: f64 = 30.0;

/// The bird's bottom edge must stay above this line.
///
/// Tracks the nearest pipe the bird has not yet cleared, or the middle of the
/// world when there is none.
pub fn target_line(state: &GameState, config: &GameConfig) -> f64 {
    state
        .pipes
        .iter()
        .find(|pipe| pipe.right(config) > config.bird_x)
        .map(|pipe| pipe.gap_bottom(config) - GAP_BOTTOM_MARGIN)
        .unwrap_or(config.world_height / 2.0 + config.bird_size)
}

/// Flap when falling and the bird's bottom has dropped below the target line.
pub fn should_flap(state: &GameState, config: &GameConfig) -> bool {
    state.bird_velocity >= 0.0 && state.bird_y + config.bird_size > target_line(state, config)
}
