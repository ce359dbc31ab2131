//! Game configuration.
//!
//! Defaults reproduce the classic 640×480 layout. A JSON file named by the
//! `BULLET_DODGE_CONFIG` environment variable may override any subset of the
//! fields.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable holding the path of an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "BULLET_DODGE_CONFIG";

/// Frames per second the fire interval is expressed against.
pub const FIRE_RATE_BASE: u32 = 60;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Width of the scoreboard column on the right of the screen.
    pub scoreboard_width: u32,
    /// Side length of every sprite (player, enemy, bullet).
    pub sprite_size: u32,
    /// Bullet speed in pixels per frame.
    pub bullet_speed: f64,
    /// A new enemy appears whenever the frame counter is a multiple of this.
    pub spawn_every_frames: u64,
    pub enemy_bullet_count: u32,
    /// Volleys per 60 frames.
    pub enemy_bullet_frequency: u32,
    /// Downward speed of the built-in path, in pixels per millisecond.
    pub path_descent_per_ms: f64,
    /// Degrees the built-in path turns an enemy on every evaluation.
    pub path_spin_degrees: f64,
    /// Frame budget of the main loop.
    pub frame_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 640,
            screen_height: 480,
            scoreboard_width: 100,
            sprite_size: 20,
            bullet_speed: 5.0,
            spawn_every_frames: 100,
            enemy_bullet_count: 5,
            enemy_bullet_frequency: 10,
            path_descent_per_ms: 0.1,
            path_spin_degrees: 7.0,
            frame_millis: 16,
        }
    }
}

impl GameConfig {
    pub fn playfield_width(&self) -> u32 {
        self.screen_width.saturating_sub(self.scoreboard_width)
    }

    pub fn sprite_radius(&self) -> f64 {
        f64::from(self.sprite_size / 2)
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from the file named by `BULLET_DODGE_CONFIG`, or fall back to
    /// the defaults when the variable is unset or empty.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => {
                let config = Self::from_file(Path::new(&path))?;
                log::info!("Loaded config from {}", Path::new(&path).display());
                Ok(config)
            }
            _ => {
                log::info!("No {} set, using default config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scoreboard_width >= self.screen_width {
            return Err(ConfigError::Invalid(format!(
                "scoreboard_width {} leaves no playfield in screen_width {}",
                self.scoreboard_width, self.screen_width
            )));
        }
        if self.sprite_size == 0
            || self.sprite_size > self.playfield_width()
            || self.sprite_size > self.screen_height
        {
            return Err(ConfigError::Invalid(format!(
                "sprite_size {} does not fit a {}x{} playfield",
                self.sprite_size,
                self.playfield_width(),
                self.screen_height
            )));
        }
        if !(self.bullet_speed > 0.0) {
            return Err(ConfigError::Invalid("bullet_speed must be positive".into()));
        }
        // Enemies only retire below the bottom edge, so they must descend.
        if !(self.path_descent_per_ms > 0.0) || !self.path_descent_per_ms.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "path_descent_per_ms {} must be positive and finite",
                self.path_descent_per_ms
            )));
        }
        if !self.path_spin_degrees.is_finite() {
            return Err(ConfigError::Invalid("path_spin_degrees must be finite".into()));
        }
        if self.spawn_every_frames == 0 {
            return Err(ConfigError::Invalid("spawn_every_frames must be at least 1".into()));
        }
        if self.enemy_bullet_count == 0 {
            return Err(ConfigError::Invalid("enemy_bullet_count must be at least 1".into()));
        }
        if self.enemy_bullet_frequency == 0 || self.enemy_bullet_frequency > FIRE_RATE_BASE {
            return Err(ConfigError::Invalid(format!(
                "enemy_bullet_frequency must be within 1..={}",
                FIRE_RATE_BASE
            )));
        }
        if self.frame_millis == 0 {
            return Err(ConfigError::Invalid("frame_millis must be at least 1".into()));
        }
        Ok(())
    }
}
