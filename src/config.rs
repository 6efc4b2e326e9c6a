//! Game configuration
//!
//! Read once at startup from JSON. Every field has a default, so a partial
//! file only overrides what it names.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Platform spawn corridor tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Platforms must exist this far above the player
    pub spawn_ahead: f32,
    /// Platforms further than this below the camera are removed
    pub despawn_below: f32,
    /// Platforms spawned up front, before the first tick
    pub initial_platforms: u32,
    /// Fraction of peak jump height used as the smallest step
    pub min_jump_factor: f32,
    /// Fraction of peak jump height used as the largest step
    pub max_jump_factor: f32,
    /// Smallest step allowed after calibration
    pub min_step_clamp: f32,
    /// Largest step allowed after calibration
    pub max_step_clamp: f32,
    /// Horizontal inset from the camera edges
    pub x_padding: f32,
    /// Distance between the player's start and the start platform below it
    pub start_margin: f32,
    /// Platform collider width
    pub platform_width: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            spawn_ahead: 14.0,
            despawn_below: 12.0,
            initial_platforms: 18,
            min_jump_factor: 0.60,
            max_jump_factor: 0.88,
            min_step_clamp: 0.8,
            max_step_clamp: 3.5,
            x_padding: 0.8,
            start_margin: crate::consts::START_PLATFORM_MARGIN,
            platform_width: 1.2,
        }
    }
}

/// Player physics and control tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Gravity magnitude (world units/s²)
    pub gravity: f32,
    /// Vertical velocity applied on landing
    pub jump_force: f32,
    /// Only jump when the contact normal points up enough
    pub require_top_landing: bool,
    /// Minimum upward normal component for a landing (0..1)
    pub min_up_normal: f32,
    /// Wrap horizontally at the camera edges
    pub wrap_around: bool,
    /// Distance beyond the edge before wrapping
    pub wrap_padding: f32,
    /// Horizontal speed at full input
    pub move_speed: f32,
    /// Fraction of screen width a drag must cover for full input
    pub drag_sensitivity: f32,
    /// Accelerometer multiplier
    pub tilt_sensitivity: f32,
    /// Input smoothing rate (higher = snappier)
    pub input_smoothing: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            jump_force: 12.0,
            require_top_landing: true,
            min_up_normal: 0.5,
            wrap_around: true,
            wrap_padding: 0.5,
            move_speed: 6.0,
            drag_sensitivity: 0.35,
            tilt_sensitivity: 1.7,
            input_smoothing: 12.0,
        }
    }
}

/// Camera follow tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera sits this far above the player
    pub y_offset: f32,
    /// Catch-up rate (higher = faster)
    pub smooth_speed: f32,
    /// Floor for the camera Y
    pub min_y: f32,
    /// Orthographic half-height of the view
    pub half_height: f32,
    /// Width / height of the viewport
    pub aspect: f32,
    /// Viewport width in screen pixels (drag normalization)
    pub screen_width: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            y_offset: 1.0,
            smooth_speed: 8.0,
            min_y: -9999.0,
            half_height: 5.0,
            aspect: 9.0 / 16.0,
            screen_width: 1080.0,
        }
    }
}

/// Background tiling tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// 1 = locked to the camera, < 1 = parallax
    pub parallax_factor: f32,
    /// Overlap between tiles to hide seams
    pub overlap: f32,
    /// Height of one tile in world units
    pub tile_height: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            parallax_factor: 1.0,
            overlap: 0.2,
            tile_height: 10.0,
        }
    }
}

/// Game over detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOverConfig {
    /// Game over once the player is this far below the camera
    pub fall_limit: f32,
}

impl Default for GameOverConfig {
    fn default() -> Self {
        Self { fall_limit: 8.0 }
    }
}

/// Scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Measure height from the starting Y instead of raw Y
    pub use_start_offset: bool,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            use_start_offset: true,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub player: PlayerConfig,
    pub camera: CameraConfig,
    pub background: BackgroundConfig,
    pub game_over: GameOverConfig,
    pub score: ScoreConfig,
}

/// Failure to read a config file
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.field.spawn_ahead, 14.0);
        assert_eq!(config.field.despawn_below, 12.0);
        assert_eq!(config.field.initial_platforms, 18);
        assert_eq!(config.field.min_jump_factor, 0.60);
        assert_eq!(config.field.max_jump_factor, 0.88);
        assert_eq!(config.field.min_step_clamp, 0.8);
        assert_eq!(config.field.max_step_clamp, 3.5);
        assert_eq!(config.player.jump_force, 12.0);
        assert_eq!(config.game_over.fall_limit, 8.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json(r#"{ "field": { "spawn_ahead": 20.0 }, "player": { "jump_force": 10 } }"#)
                .unwrap();
        assert_eq!(config.field.spawn_ahead, 20.0);
        assert_eq!(config.field.despawn_below, 12.0);
        assert_eq!(config.player.jump_force, 10.0);
        assert!(config.player.wrap_around);
    }

    #[test]
    fn test_invalid_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
