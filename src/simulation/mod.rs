//! Flappy Bird simulation kernel.
//!
//! The bird falls under constant gravity and a flap resets its velocity
//! upward. Pipes spawn at the right edge on a wall-clock timer, scroll left at
//! a fixed speed and score a point once the bird is past them. Every function
//! here is pure: the next state depends only on the previous state, the frame
//! time, the flap flag and the injected random source.

pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod step;
pub mod types;

pub use collision::{collides, crash_cause};
pub use obstacles::{advance_obstacles, ObstacleUpdate};
pub use physics::integrate;
pub use step::step;
pub use types::*;
