//! Configuration loading for the coverage engine.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub sensing: SensingConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
}

/// Grid resolution settings.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct GridConfig {
    /// Cell size for depth-scan mode in meters (default: 0.05)
    #[serde(default = "default_voxel_size")]
    pub voxel_size: f32,

    /// Cell size for geofenced walking mode in meters (default: 1.0)
    #[serde(default = "default_walking_voxel_size")]
    pub walking_voxel_size: f32,
}

/// Depth sensing settings.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SensingConfig {
    /// Scan tick rate in Hz (default: 60.0)
    #[serde(default = "default_tick_hz")]
    pub tick_hz: f32,

    /// Minimum per-point confidence painted into the grid (default: 0.5)
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,

    /// Simulated-sensor RNG seed; 0 = random each run (default: 0)
    #[serde(default)]
    pub sim_seed: u64,
}

/// Walking-mode tracking settings.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct TrackingConfig {
    /// Position channel poll interval in milliseconds (default: 100)
    #[serde(default = "default_channel_poll_ms")]
    pub channel_poll_ms: u64,
}

fn default_voxel_size() -> f32 {
    0.05
}

fn default_walking_voxel_size() -> f32 {
    1.0
}

fn default_tick_hz() -> f32 {
    60.0
}

fn default_min_confidence() -> f32 {
    0.5
}

fn default_channel_poll_ms() -> u64 {
    100
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            voxel_size: default_voxel_size(),
            walking_voxel_size: default_walking_voxel_size(),
        }
    }
}

impl Default for SensingConfig {
    fn default() -> Self {
        Self {
            tick_hz: default_tick_hz(),
            min_confidence: default_min_confidence(),
            sim_seed: 0,
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            channel_poll_ms: default_channel_poll_ms(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
