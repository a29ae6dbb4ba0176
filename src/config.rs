//! World tuning loaded from `~/.flappy/config.json`.
//!
//! Every field is optional in the file; anything left out keeps the value
//! from `constants.rs`.

use crate::constants::*;
use crate::utils::persistence::{data_path, read_json};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// All world constants used by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Velocity added per frame (positive = downward).
    pub gravity: f64,
    /// Velocity set by a flap. Replaces the current velocity.
    pub jump_force: f64,
    /// Horizontal scroll per frame.
    pub pipe_speed: f64,
    pub pipe_width: f64,
    pub gap_height: f64,
    /// Lower bound (inclusive) for a new pipe's gap top.
    pub gap_y_min: f64,
    /// Upper bound (exclusive) for a new pipe's gap top.
    pub gap_y_max: f64,
    pub pipe_spawn_x: f64,
    /// Minimum wall-clock time between two spawns.
    pub spawn_interval_ms: u64,
    pub bird_x: f64,
    pub bird_size: f64,
    pub bird_start_y: f64,
    /// Lowest legal `bird_y`; anything below the ground line collides.
    pub ground_y: f64,
    pub world_width: f64,
    pub world_height: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_y_min: GAP_Y_MIN,
            gap_y_max: GAP_Y_MAX,
            pipe_spawn_x: PIPE_SPAWN_X,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            bird_x: BIRD_X,
            bird_size: BIRD_SIZE,
            bird_start_y: BIRD_START_Y,
            ground_y: GROUND_Y,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Midpoint of the gap range, used when no random source is available.
    pub fn gap_y_midpoint(&self) -> f64 {
        (self.gap_y_min + self.gap_y_max) / 2.0
    }

    /// Pipes whose leading edge is left of this line count as passed.
    pub fn score_line(&self) -> f64 {
        self.bird_x - self.bird_size
    }

    /// Check that the values describe a playable world.
    pub fn validate(&self) -> io::Result<()> {
        let positive = [
            ("gravity", self.gravity),
            ("pipe_speed", self.pipe_speed),
            ("pipe_width", self.pipe_width),
            ("gap_height", self.gap_height),
            ("bird_size", self.bird_size),
            ("world_width", self.world_width),
            ("world_height", self.world_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        if !(self.jump_force.is_finite() && self.jump_force < 0.0) {
            return Err(invalid(format!(
                "jump_force must be negative (upward), got {}",
                self.jump_force
            )));
        }
        if self.gap_y_min < 0.0 || self.gap_y_min >= self.gap_y_max {
            return Err(invalid(format!(
                "gap range [{}, {}) is empty or negative",
                self.gap_y_min, self.gap_y_max
            )));
        }
        if self.spawn_interval_ms == 0 {
            return Err(invalid("spawn_interval_ms must be non-zero".to_string()));
        }
        if self.ground_y <= 0.0 {
            return Err(invalid(format!(
                "ground_y must be positive, got {}",
                self.ground_y
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

/// Load config from an explicit path. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> io::Result<GameConfig> {
    let config = match read_json::<GameConfig>(path)? {
        Some(config) => {
            info!("loaded config from {}", path.display());
            config
        }
        None => {
            warn!("no config at {}, using defaults", path.display());
            GameConfig::default()
        }
    };
    config.validate()?;
    Ok(config)
}

/// Load `~/.flappy/config.json`.
pub fn load_config() -> io::Result<GameConfig> {
    load_config_from(&data_path(CONFIG_FILE_NAME)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("flappy-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.gravity, 0.6);
        assert_eq!(config.jump_force, -12.0);
        assert_eq!(config.pipe_speed, 4.0);
        assert_eq!(config.ground_y, 560.0);
        assert_eq!(config.spawn_interval_ms, 1500);
        assert_eq!(config.pipe_spawn_x, 800.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gap_midpoint() {
        assert_eq!(GameConfig::default().gap_y_midpoint(), 250.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = scratch_file("partial.json", r#"{ "gravity": 0.5 }"#);
        let config = load_config_from(&path).expect("partial config loads");
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.jump_force, JUMP_FORCE);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("flappy-config-does-not-exist.json");
        let config = load_config_from(&path).expect("missing config is fine");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let path = scratch_file("upward_gravity.json", r#"{ "jump_force": 3.0 }"#);
        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_gap_range_rejected() {
        let config = GameConfig {
            gap_y_min: 300.0,
            gap_y_max: 300.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = scratch_file("malformed.json", "gravity = 0.6");
        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(path).ok();
    }
}
