//! Game configuration.
//!
//! All tunable values are grouped here. Every field has a default, so a TOML
//! file only needs to mention what it changes:
//!
//! ```toml
//! [obstacles]
//! step = 0.15
//!
//! [player]
//! jump_height = 2.5
//! ```

use std::path::{Path, PathBuf};

use donut_physics::Easing;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level game configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub obstacles: ObstacleConfig,
    pub player: PlayerConfig,
    pub render: RenderConfig,
}

/// The obstacle row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Number of obstacles, created once.
    pub count: usize,

    /// Horizontal offset of obstacle 0.
    pub first_offset: f32,

    /// Distance between neighbouring obstacles.
    pub spacing: f32,

    /// Distance every obstacle moves towards the player each frame.
    pub step: f32,

    /// Obstacles below this offset are recycled to the back of the row.
    pub recycle_threshold: f32,

    /// Collision half-extents. Matches the rendered cube exactly.
    pub half_extents: Vec3,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            count: 5,
            first_offset: 2.0,
            spacing: 5.0,
            step: 0.1,
            recycle_threshold: -5.0,
            half_extents: Vec3::splat(0.5),
        }
    }
}

impl ObstacleConfig {
    /// Offset obstacle `index` starts at, and returns to on restart.
    #[inline]
    pub fn initial_offset(&self, index: usize) -> f32 {
        self.first_offset + index as f32 * self.spacing
    }
}

/// The player torus and its jump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Fixed horizontal position.
    pub x: f32,

    /// Resting height of the player's centre.
    pub ground_y: f32,

    /// Collision half-extents. Smaller than the torus on purpose so grazing
    /// an obstacle does not end the run.
    pub half_extents: Vec3,

    /// Peak height above ground.
    pub jump_height: f32,

    /// Time to reach the peak (ms). The fall takes the same time.
    pub jump_duration_ms: f32,

    pub jump_easing: Easing,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            ground_y: 0.0,
            half_extents: Vec3::splat(0.35),
            jump_height: 2.0,
            jump_duration_ms: 300.0,
            jump_easing: Easing::QuadraticOut,
        }
    }
}

/// Scene settings read by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Text shown above the track.
    pub title: String,

    /// TrueType font for the title. `None` uses the bundled font, as does a
    /// file that cannot be read.
    pub font_path: Option<PathBuf>,

    /// Torus spin (radians per second).
    pub spin_speed: f32,

    pub ambient_intensity: f32,
    pub directional_intensity: f32,

    /// Background colour (linear RGB, 0..1).
    pub clear_color: [f32; 3],

    pub player_color: [u8; 3],
    pub obstacle_color: [u8; 3],

    /// Show the tuning panel on startup.
    pub show_debug_panel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Donut Runner".to_string(),
            font_path: None,
            spin_speed: 1.5,
            ambient_intensity: 0.4,
            directional_intensity: 2.0,
            clear_color: [0.05, 0.05, 0.1],
            player_color: [230, 150, 90],
            obstacle_color: [120, 200, 240],
            show_debug_panel: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject values the game loop cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let obstacles = &self.obstacles;
        if obstacles.count == 0 {
            return Err(ConfigError::Invalid("obstacles.count must be at least 1".into()));
        }
        if !(obstacles.spacing > 0.0) {
            return Err(ConfigError::Invalid("obstacles.spacing must be positive".into()));
        }
        if !(obstacles.step > 0.0) {
            return Err(ConfigError::Invalid("obstacles.step must be positive".into()));
        }
        require_finite("obstacles.first_offset", obstacles.first_offset)?;
        require_finite("obstacles.recycle_threshold", obstacles.recycle_threshold)?;
        require_positive_extents("obstacles.half_extents", obstacles.half_extents)?;
        if obstacles.recycle_threshold >= obstacles.first_offset {
            return Err(ConfigError::Invalid(
                "obstacles.recycle_threshold must be below obstacles.first_offset".into(),
            ));
        }

        let player = &self.player;
        require_finite("player.x", player.x)?;
        require_finite("player.ground_y", player.ground_y)?;
        require_positive_extents("player.half_extents", player.half_extents)?;
        if !(player.jump_duration_ms > 0.0) {
            return Err(ConfigError::Invalid("player.jump_duration_ms must be positive".into()));
        }
        if !(player.jump_height >= 0.0) {
            return Err(ConfigError::Invalid("player.jump_height must not be negative".into()));
        }

        Ok(())
    }
}

fn require_finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be a finite number")))
    }
}

fn require_positive_extents(name: &str, extents: Vec3) -> Result<(), ConfigError> {
    if extents.is_finite() && extents.cmpgt(Vec3::ZERO).all() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive and finite")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.obstacles.count, 5);
        assert_eq!(config.obstacles.spacing, 5.0);
    }

    #[test]
    fn test_initial_offsets() {
        let config = ObstacleConfig::default();
        let offsets: Vec<f32> = (0..config.count).map(|i| config.initial_offset(i)).collect();
        assert_eq!(offsets, vec![2.0, 7.0, 12.0, 17.0, 22.0]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [obstacles]
            step = 0.25

            [player]
            jump_easing = "sine_in_out"
            "#,
        )
        .unwrap();

        assert_eq!(config.obstacles.step, 0.25);
        assert_eq!(config.obstacles.count, 5);
        assert_eq!(config.player.jump_easing, Easing::SineInOut);
        assert_eq!(config.player.jump_height, 2.0);
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_rejects_zero_obstacles() {
        let err = GameConfig::from_toml_str("[obstacles]\ncount = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_non_positive_spacing() {
        let mut config = GameConfig::default();
        config.obstacles.spacing = 0.0;
        assert!(config.validate().is_err());

        config.obstacles.spacing = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_jump() {
        let mut config = GameConfig::default();
        config.player.jump_duration_ms = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.jump_height = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let err = GameConfig::from_toml_str("[obstacles]\nrecycle_threshold = nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut config = GameConfig::default();
        config.obstacles.first_offset = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_player() {
        let mut config = GameConfig::default();
        config.player.ground_y = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.x = f32::NEG_INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_half_extents() {
        let mut config = GameConfig::default();
        config.obstacles.half_extents = Vec3::new(0.5, f32::NAN, 0.5);
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.half_extents = Vec3::new(0.35, 0.0, 0.35);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_toml_str("[obstacles\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
