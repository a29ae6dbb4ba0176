// World dimensions (world units = pixels)
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;

// Bird physics (per frame)
pub const GRAVITY: f64 = 0.6;
pub const JUMP_FORCE: f64 = -12.0;

// Bird geometry
pub const BIRD_X: f64 = 100.0;
pub const BIRD_SIZE: f64 = 40.0;
pub const BIRD_START_Y: f64 = 300.0;
pub const GROUND_Y: f64 = WORLD_HEIGHT - BIRD_SIZE;

// Pipes
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_SPEED: f64 = 4.0;
pub const PIPE_SPAWN_X: f64 = WORLD_WIDTH;
pub const GAP_HEIGHT: f64 = 200.0;
pub const GAP_Y_MIN: f64 = 100.0;
pub const GAP_Y_MAX: f64 = 400.0;
pub const SPAWN_INTERVAL_MS: u64 = 1500;

// Frame driver
pub const FRAME_INTERVAL_MS: u64 = 16;

// Config and log files, relative to ~/.flappy/
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flappy.log";
