//! TOML-based planner configuration.
//!
//! Stores the tunables a host may want to adjust without rebuilding:
//! - Recommendation scoring weights
//! - Weather advisor tolerances
//! - Bucket defaults for ad-hoc activities
//! - The default weekend shape
//!
//! Configuration is stored at `~/.config/weekendly/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::advisor::AdvisorConfig;
use crate::error::ConfigError;
use crate::interval::ClockTime;
use crate::recommend::ScoringConfig;

/// Defaults applied to ad-hoc activities staged without a time or
/// duration of their own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BucketDefaults {
    #[serde(default = "default_bucket_time")]
    pub default_time: ClockTime,
    #[serde(default = "default_bucket_duration")]
    pub default_duration: u32,
}

fn default_bucket_time() -> ClockTime {
    ClockTime::NOON
}

fn default_bucket_duration() -> u32 {
    120
}

impl Default for BucketDefaults {
    fn default() -> Self {
        Self {
            default_time: default_bucket_time(),
            default_duration: default_bucket_duration(),
        }
    }
}

fn default_weekend_key() -> String {
    "two_days".to_string()
}

/// Planner configuration.
///
/// Serialized to/from TOML at `~/.config/weekendly/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Weekend option key selected when a session starts.
    #[serde(default = "default_weekend_key")]
    pub default_weekend: String,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub bucket: BucketDefaults,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_weekend: default_weekend_key(),
            scoring: ScoringConfig::default(),
            advisor: AdvisorConfig::default(),
            bucket: BucketDefaults::default(),
        }
    }
}

impl PlannerConfig {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/weekendly"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file
    /// does not exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Persist the configuration.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })
    }
}
