//! Turbine configuration - classification thresholds as operator-tunable TOML values
//!
//! Every threshold used by the status classifier is a field here. Each struct
//! implements `Default` with values from `config::defaults`, so behaviour is
//! unchanged when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;

/// Errors loading a turbine configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration for a turbine deployment.
///
/// Load with `TurbineConfig::load()` which searches:
/// 1. `$WINDCURVE_CONFIG` env var
/// 2. `./turbine_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurbineConfig {
    /// Turbine identification
    #[serde(default)]
    pub turbine: TurbineInfo,

    /// Status-classification thresholds
    #[serde(default)]
    pub thresholds: ClassifierThresholds,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Turbine identification, logged at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurbineInfo {
    /// Site / asset name
    #[serde(default)]
    pub name: String,
    /// Turbine model designation
    #[serde(default)]
    pub model: String,
    /// Nameplate rated power (kW) - informational only
    #[serde(default)]
    pub rated_power_kw: f64,
}

impl Default for TurbineInfo {
    fn default() -> Self {
        Self {
            name: "TURBINE".to_string(),
            model: String::new(),
            rated_power_kw: 0.0,
        }
    }
}

/// Thresholds driving the operational-status classification rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    /// Cut-in wind speed (m/s)
    #[serde(default = "default_cut_in")]
    pub cut_in_speed_ms: f64,
    /// High-wind (cut-out) speed (m/s)
    #[serde(default = "default_high_wind")]
    pub high_wind_speed_ms: f64,
    /// Power below this at high wind counts as a high-wind stop
    #[serde(default = "default_high_wind_power_max")]
    pub high_wind_power_max: f64,
    /// Power reading that counts as fully stopped
    #[serde(default = "default_stopped_power")]
    pub stopped_power: f64,
}

fn default_cut_in() -> f64 {
    defaults::CUT_IN_SPEED_MS
}
fn default_high_wind() -> f64 {
    defaults::HIGH_WIND_SPEED_MS
}
fn default_high_wind_power_max() -> f64 {
    defaults::HIGH_WIND_POWER_MAX
}
fn default_stopped_power() -> f64 {
    defaults::STOPPED_POWER
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            cut_in_speed_ms: defaults::CUT_IN_SPEED_MS,
            high_wind_speed_ms: defaults::HIGH_WIND_SPEED_MS,
            high_wind_power_max: defaults::HIGH_WIND_POWER_MAX,
            stopped_power: defaults::STOPPED_POWER,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the dashboard API
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    defaults::SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

impl TurbineConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WINDCURVE_CONFIG` environment variable
    /// 2. `./turbine_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("WINDCURVE_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), turbine = %config.turbine.name, "Loaded turbine config from WINDCURVE_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from WINDCURVE_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "WINDCURVE_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("turbine_config.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(turbine = %config.turbine.name, "Loaded turbine config from ./turbine_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./turbine_config.toml, using defaults");
                }
            }
        }

        info!("No turbine_config.toml found - using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject threshold combinations that make the classification rule degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if t.cut_in_speed_ms < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cut_in_speed_ms must be non-negative, got {}",
                t.cut_in_speed_ms
            )));
        }
        if t.high_wind_speed_ms <= t.cut_in_speed_ms {
            return Err(ConfigError::Invalid(format!(
                "high_wind_speed_ms ({}) must exceed cut_in_speed_ms ({})",
                t.high_wind_speed_ms, t.cut_in_speed_ms
            )));
        }
        if t.high_wind_power_max < t.stopped_power {
            return Err(ConfigError::Invalid(format!(
                "high_wind_power_max ({}) must be at least stopped_power ({})",
                t.high_wind_power_max, t.stopped_power
            )));
        }
        Ok(())
    }
}
