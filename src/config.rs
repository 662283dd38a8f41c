// config.rs - Animation tuning, loadable from JSON
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Damped bounce of the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceConfig {
    /// Seconds before the ball snaps back to rest
    pub duration: f32,
    /// Bounces per second
    pub frequency: f32,
    pub peak_height: f32,
    /// Envelope decay per second
    pub decay_rate: f32,
    /// Tumble speed around X, Y and Z in radians per second
    pub spin_rates: Vec3,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            duration: 4.0,
            frequency: 2.0,
            peak_height: 3.0,
            decay_rate: 0.8,
            spin_rates: Vec3::new(1.0, 1.5, 0.5),
        }
    }
}

/// Eased rise of the door
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseConfig {
    pub height: f32,
    pub duration: f32,
}

impl Default for RiseConfig {
    fn default() -> Self {
        Self {
            height: 12.0,
            duration: 3.0,
        }
    }
}

/// Continuous rotation of the showcase cubes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Radians per second of the first cube
    pub base_speed: f32,
    /// Added per cube index
    pub speed_step: f32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            base_speed: 1.0,
            speed_step: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub bounce: BounceConfig,
    pub rise: RiseConfig,
    pub spin: SpinConfig,
}

impl AnimationConfig {
    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("bounce.duration", self.bounce.duration)?;
        positive("bounce.frequency", self.bounce.frequency)?;
        finite("bounce.peak_height", self.bounce.peak_height)?;
        finite("bounce.decay_rate", self.bounce.decay_rate)?;
        if !self.bounce.spin_rates.is_finite() {
            return Err(ConfigError::Invalid {
                field: "bounce.spin_rates",
                reason: "must be finite",
            });
        }
        positive("rise.duration", self.rise.duration)?;
        finite("rise.height", self.rise.height)?;
        finite("spin.base_speed", self.spin.base_speed)?;
        finite("spin.speed_step", self.spin.speed_step)
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite",
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be greater than zero",
        })
    }
}
