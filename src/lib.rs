//! Flappy - a Flappy Bird clone with a pure simulation kernel.
//!
//! `simulation` holds the per-frame rules, `session` wraps them in the
//! object a frame driver talks to, and `ui`/`driver` form the terminal front
//! end used by the `flappy` binary.

pub mod build_info;
pub mod clock;
pub mod config;
pub mod constants;
pub mod driver;
pub mod input;
pub mod session;
pub mod simulation;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use config::GameConfig;
pub use session::Session;
pub use simulation::{GameState, Obstacle, Phase};
