//! Configuration types for sort visualization parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Algorithm;

/// Scalar type of array elements.
pub type Value = u32;

/// Smallest array size offered to users.
pub const MIN_ARRAY_SIZE: usize = 5;
/// Largest array size offered to users.
pub const MAX_ARRAY_SIZE: usize = 100;
/// Slowest playback speed.
pub const MIN_SPEED: u32 = 1;
/// Fastest playback speed.
pub const MAX_SPEED: u32 = 100;

fn default_array_size() -> usize {
    30
}

fn default_speed() -> u32 {
    50
}

fn default_value_range() -> (Value, Value) {
    (5, 105)
}

/// Top-level visualizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Algorithm traced on the next start.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Number of elements in generated snapshots.
    #[serde(default = "default_array_size")]
    pub array_size: usize,
    /// Playback speed; the delay between automatic steps is `1000 / speed` ms.
    #[serde(default = "default_speed")]
    pub speed: u32,
    /// Seed for snapshot generation. `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Half-open range `[low, high)` of generated values.
    #[serde(default = "default_value_range")]
    pub value_range: (Value, Value),
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            array_size: default_array_size(),
            speed: default_speed(),
            seed: None,
            value_range: default_value_range(),
        }
    }
}

impl VisualizerConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Delay between automatic playback steps at the configured speed.
    #[inline]
    pub fn step_delay(&self) -> Duration {
        step_delay(self.speed)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_array_size(self.array_size)?;
        validate_speed(self.speed)?;
        let (low, high) = self.value_range;
        if low >= high {
            return Err(ConfigError::EmptyValueRange { low, high });
        }
        Ok(())
    }
}

/// Delay for one automatic step: `1000 / speed` milliseconds.
pub fn step_delay(speed: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(speed.max(MIN_SPEED)))
}

pub(crate) fn validate_array_size(size: usize) -> Result<(), ConfigError> {
    if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
        return Err(ConfigError::InvalidArraySize {
            size,
            min: MIN_ARRAY_SIZE,
            max: MAX_ARRAY_SIZE,
        });
    }
    Ok(())
}

pub(crate) fn validate_speed(speed: u32) -> Result<(), ConfigError> {
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(ConfigError::InvalidSpeed {
            speed,
            min: MIN_SPEED,
            max: MAX_SPEED,
        });
    }
    Ok(())
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Array size {size} outside supported range {min}..={max}")]
    InvalidArraySize { size: usize, min: usize, max: usize },
    #[error("Speed {speed} outside supported range {min}..={max}")]
    InvalidSpeed { speed: u32, min: u32, max: u32 },
    #[error("Value range [{low}, {high}) is empty")]
    EmptyValueRange { low: Value, high: Value },
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
