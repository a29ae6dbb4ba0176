//! Bird vertical motion.

use crate::config::GameConfig;

/// Advance the bird one frame.
///
/// A flap sets the velocity to `jump_force` (it does not add to it).
/// Position integrates with the updated velocity (semi-implicit Euler).
/// Velocity is unbounded; collision detection bounds the position.
pub fn integrate(
    bird_y: f64,
    bird_velocity: f64,
    impulse: bool,
    config: &GameConfig,
) -> (f64, f64) {
    let velocity = if impulse {
        config.jump_force
    } else {
        bird_velocity + config.gravity
    };
    (bird_y + velocity, velocity)
}
