//! Configuration file support for cafcalc.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/cafcalc/config.toml`.
//! Every field has a serde default, so a partial (or absent) file works.

use crate::clearance::{DEFAULT_CLEARED_FRACTION, DEFAULT_SAFETY_WINDOW_HOURS};
use crate::decay::DEFAULT_HALF_LIFE_HOURS;
use crate::error::{Error, Result};
use crate::timeline::{
    DETAIL_STEP_COUNT, DETAIL_STEP_HOURS, SUMMARY_STEP_COUNT, SUMMARY_STEP_HOURS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunable parameters threaded through one calculation run.
///
/// The engine takes these explicitly; only [`Config`] touches the
/// filesystem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineParams {
    pub half_life_hours: f64,
    pub cleared_fraction: f64,
    pub safety_window_hours: f64,
    /// Local hour used when the caller supplies no explicit bedtime
    pub bedtime_hour: u32,
    pub detail_step_hours: f64,
    pub detail_step_count: usize,
    pub summary_step_hours: f64,
    pub summary_step_count: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            half_life_hours: DEFAULT_HALF_LIFE_HOURS,
            cleared_fraction: DEFAULT_CLEARED_FRACTION,
            safety_window_hours: DEFAULT_SAFETY_WINDOW_HOURS,
            bedtime_hour: default_bedtime_hour(),
            detail_step_hours: DETAIL_STEP_HOURS,
            detail_step_count: DETAIL_STEP_COUNT,
            summary_step_hours: SUMMARY_STEP_HOURS,
            summary_step_count: SUMMARY_STEP_COUNT,
        }
    }
}

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pharmacokinetics: PharmacokineticsConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub timeline: TimelineConfig,
}

/// Decay model parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PharmacokineticsConfig {
    #[serde(default = "default_half_life_hours")]
    pub half_life_hours: f64,

    #[serde(default = "default_cleared_fraction")]
    pub cleared_fraction: f64,
}

impl Default for PharmacokineticsConfig {
    fn default() -> Self {
        Self {
            half_life_hours: default_half_life_hours(),
            cleared_fraction: default_cleared_fraction(),
        }
    }
}

/// Bedtime and intake-window parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_safety_window_hours")]
    pub safety_window_hours: f64,

    #[serde(default = "default_bedtime_hour")]
    pub bedtime_hour: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            safety_window_hours: default_safety_window_hours(),
            bedtime_hour: default_bedtime_hour(),
        }
    }
}

/// Projection series parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_detail_step_hours")]
    pub detail_step_hours: f64,

    #[serde(default = "default_detail_step_count")]
    pub detail_step_count: usize,

    #[serde(default = "default_summary_step_hours")]
    pub summary_step_hours: f64,

    #[serde(default = "default_summary_step_count")]
    pub summary_step_count: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            detail_step_hours: default_detail_step_hours(),
            detail_step_count: default_detail_step_count(),
            summary_step_hours: default_summary_step_hours(),
            summary_step_count: default_summary_step_count(),
        }
    }
}

// Default value functions
fn default_half_life_hours() -> f64 {
    DEFAULT_HALF_LIFE_HOURS
}

fn default_cleared_fraction() -> f64 {
    DEFAULT_CLEARED_FRACTION
}

fn default_safety_window_hours() -> f64 {
    DEFAULT_SAFETY_WINDOW_HOURS
}

fn default_bedtime_hour() -> u32 {
    23
}

fn default_detail_step_hours() -> f64 {
    DETAIL_STEP_HOURS
}

fn default_detail_step_count() -> usize {
    DETAIL_STEP_COUNT
}

fn default_summary_step_hours() -> f64 {
    SUMMARY_STEP_HOURS
}

fn default_summary_step_count() -> usize {
    SUMMARY_STEP_COUNT
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("cafcalc").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check field ranges before any calculation uses them
    pub fn validate(&self) -> Result<()> {
        if self.pharmacokinetics.half_life_hours <= 0.0 {
            return Err(Error::Config(format!(
                "half_life_hours must be positive, got {}",
                self.pharmacokinetics.half_life_hours
            )));
        }
        let f = self.pharmacokinetics.cleared_fraction;
        if !(f > 0.0 && f < 1.0) {
            return Err(Error::Config(format!(
                "cleared_fraction must be in (0, 1), got {}",
                f
            )));
        }
        if self.schedule.bedtime_hour > 23 {
            return Err(Error::Config(format!(
                "bedtime_hour must be 0-23, got {}",
                self.schedule.bedtime_hour
            )));
        }
        Ok(())
    }

    /// Collapse the file config into the parameters the engine takes
    pub fn engine_params(&self) -> EngineParams {
        EngineParams {
            half_life_hours: self.pharmacokinetics.half_life_hours,
            cleared_fraction: self.pharmacokinetics.cleared_fraction,
            safety_window_hours: self.schedule.safety_window_hours,
            bedtime_hour: self.schedule.bedtime_hour,
            detail_step_hours: self.timeline.detail_step_hours,
            detail_step_count: self.timeline.detail_step_count,
            summary_step_hours: self.timeline.summary_step_hours,
            summary_step_count: self.timeline.summary_step_count,
        }
    }
}
