//! Runtime configuration, read from the environment with fallback defaults.

use std::time::Duration;

use algoscope_sort::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Slider bounds for sort speed.
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;
pub const DEFAULT_SPEED: u32 = 50;

/// Configuration for the sorting visualizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Number of bars
    pub size: usize,

    /// Smallest generated value
    pub min: u32,

    /// Largest generated value
    pub max: u32,

    /// Speed slider, 1..=100
    pub speed: u32,

    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            speed: DEFAULT_SPEED,
            seed: None,
        }
    }
}

impl SortConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            size: env_or("ALGOSCOPE_ARRAY_SIZE", defaults.size),
            min: env_or("ALGOSCOPE_MIN_VALUE", defaults.min),
            max: env_or("ALGOSCOPE_MAX_VALUE", defaults.max),
            speed: env_or("ALGOSCOPE_SPEED", defaults.speed),
            seed: std::env::var("ALGOSCOPE_SEED")
                .ok()
                .and_then(|s| s.trim().parse().ok()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(algoscope_sort::Error::InvalidSize.into());
        }
        if self.min > self.max {
            return Err(algoscope_sort::Error::InvalidRange {
                min: self.min,
                max: self.max,
            }
            .into());
        }
        validate_speed(self.speed)
    }

    pub fn step_delay(&self) -> Duration {
        sort_delay(self.speed)
    }
}

pub fn validate_speed(speed: u32) -> Result<()> {
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(algoscope_sort::Error::InvalidSpeed(speed).into());
    }
    Ok(())
}

/// Per-step delay for a speed slider value: `101 - speed` milliseconds.
///
/// Out-of-range speeds are clamped.
pub fn sort_delay(speed: u32) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    Duration::from_millis(u64::from(MAX_SPEED + 1 - speed))
}

/// Cadence for pathfinding replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Delay after each visited-phase step
    pub visit_delay: Duration,

    /// Delay after each path-phase step
    pub path_delay: Duration,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            visit_delay: Duration::from_millis(10),
            path_delay: Duration::from_millis(30),
        }
    }
}

impl ReplayConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            visit_delay: env_millis("ALGOSCOPE_VISIT_DELAY_MS", defaults.visit_delay),
            path_delay: env_millis("ALGOSCOPE_PATH_DELAY_MS", defaults.path_delay),
        }
    }

    /// Zero delays everywhere; steps still yield between each other.
    pub fn immediate() -> Self {
        Self {
            visit_delay: Duration::ZERO,
            path_delay: Duration::ZERO,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
