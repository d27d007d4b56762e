//! Playfield geometry and gameplay tuning.
//!
//! Every dimension is in playfield units (one unit is one pixel of the
//! classic 375x500 canvas). Loaded from JSON when the player supplies a
//! config file, otherwise `GameConfig::default()`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,

    pub enemy_width: u32,
    pub enemy_height: u32,

    pub player_width: u32,
    pub player_height: u32,
    /// Gap between the player sprite and the bottom edge.
    pub player_bottom_margin: u32,

    /// Enemies kept alive at once. Must not exceed the lane count.
    pub max_enemies: usize,
    pub starting_lives: u32,

    /// Enemy speed is sampled once from `[enemy_speed_min, enemy_speed_max)`,
    /// in units per millisecond.
    pub enemy_speed_min: f64,
    pub enemy_speed_max: f64,

    /// Frames between player animation steps.
    pub animation_period: u64,
    /// Number of background images a session can pick from.
    pub background_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 375,
            height: 500,
            enemy_width: 75,
            enemy_height: 156,
            player_width: 75,
            player_height: 54,
            player_bottom_margin: 10,
            max_enemies: 3,
            starting_lives: 3,
            enemy_speed_min: 0.25,
            enemy_speed_max: 0.75,
            animation_period: 15,
            background_count: 3,
        }
    }
}

impl GameConfig {
    /// Number of enemy lanes across the playfield.
    pub fn lane_count(&self) -> usize {
        if self.enemy_width == 0 {
            return 0;
        }
        (self.width / self.enemy_width) as usize
    }

    /// Enemies the spawner keeps alive after every top-up.
    pub fn target_population(&self) -> usize {
        self.max_enemies.min(self.lane_count())
    }

    /// Third lane from the left. Saturates instead of overflowing so an
    /// oversized width shows up in `validate` as out of bounds.
    pub fn player_start_x(&self) -> u32 {
        self.player_width.saturating_mul(2)
    }

    pub fn player_y(&self) -> f64 {
        self.height as f64 - self.player_height as f64 - self.player_bottom_margin as f64
    }

    /// Right-most x the player may occupy.
    pub fn player_max_x(&self) -> u32 {
        self.width.saturating_sub(self.player_width)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("width", self.width),
            ("height", self.height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        for (field, value) in dims {
            if value == 0 {
                return Err(ConfigError::ZeroDimension { field });
            }
        }
        if self.width % self.player_width != 0 {
            return Err(ConfigError::UnalignedPlayerLanes {
                width: self.width,
                player_width: self.player_width,
            });
        }
        if self.player_start_x() > self.player_max_x() {
            return Err(ConfigError::PlayerOutOfBounds {
                start_x: self.player_start_x(),
                max_x: self.player_max_x(),
            });
        }
        if self.max_enemies == 0 || self.lane_count() < self.max_enemies {
            return Err(ConfigError::LaneSaturation {
                lanes: self.lane_count(),
                max_enemies: self.max_enemies,
            });
        }
        let speed_ok = self.enemy_speed_min.is_finite()
            && self.enemy_speed_max.is_finite()
            && self.enemy_speed_min > 0.0
            && self.enemy_speed_min < self.enemy_speed_max;
        if !speed_ok {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.enemy_speed_min,
                max: self.enemy_speed_max,
            });
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.animation_period == 0 {
            return Err(ConfigError::ZeroAnimationPeriod);
        }
        if self.background_count == 0 {
            return Err(ConfigError::NoBackgrounds);
        }
        Ok(())
    }

    /// Load and validate a config from JSON. Missing fields keep their
    /// defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::parse_json_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config without validating it, so callers can apply
    /// overrides first.
    pub fn parse_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: GameConfig = serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ZeroDimension { field: &'static str },
    UnalignedPlayerLanes { width: u32, player_width: u32 },
    PlayerOutOfBounds { start_x: u32, max_x: u32 },
    LaneSaturation { lanes: usize, max_enemies: usize },
    InvalidSpeedRange { min: f64, max: f64 },
    NoLives,
    ZeroAnimationPeriod,
    NoBackgrounds,
    Io { path: PathBuf, message: String },
    Parse { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { field } => write!(f, "{field} must be greater than zero"),
            Self::UnalignedPlayerLanes { width, player_width } => write!(
                f,
                "playfield width {width} is not a multiple of player width {player_width}"
            ),
            Self::PlayerOutOfBounds { start_x, max_x } => write!(
                f,
                "player start x {start_x} is beyond the right-most lane at {max_x}"
            ),
            Self::LaneSaturation { lanes, max_enemies } => write!(
                f,
                "max_enemies ({max_enemies}) must be between 1 and the lane count ({lanes})"
            ),
            Self::InvalidSpeedRange { min, max } => {
                write!(f, "enemy speed range [{min}, {max}) must be positive and non-empty")
            }
            Self::NoLives => write!(f, "starting_lives must be at least 1"),
            Self::ZeroAnimationPeriod => write!(f, "animation_period must be at least 1"),
            Self::NoBackgrounds => write!(f, "background_count must be at least 1"),
            Self::Io { path, message } => {
                write!(f, "cannot read config {}: {message}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "invalid config {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}
