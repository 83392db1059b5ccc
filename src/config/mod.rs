//! Turbine Configuration Module
//!
//! Provides per-turbine configuration loaded from TOML files, replacing
//! hardcoded classification thresholds with operator-tunable values.
//!
//! ## Loading Order
//!
//! 1. `WINDCURVE_CONFIG` environment variable (path to TOML file)
//! 2. `turbine_config.toml` in the current working directory
//! 3. Built-in defaults (matching the contractual reference turbine)
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(TurbineConfig::load());
//!
//! // Anywhere in the codebase:
//! let cut_in = config::get().thresholds.cut_in_speed_ms;
//! ```

pub mod defaults;
mod turbine_config;

pub use turbine_config::*;

use std::sync::OnceLock;

/// Global turbine configuration, initialized once at startup.
static TURBINE_CONFIG: OnceLock<TurbineConfig> = OnceLock::new();

/// Initialize the global turbine configuration.
///
/// Must be called exactly once before any calls to `get()`.
pub fn init(config: TurbineConfig) {
    if TURBINE_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once - ignoring");
    }
}

/// Get a reference to the global turbine configuration.
///
/// Panics if `init()` has not been called. A missing config is a fatal
/// startup error, not a recoverable condition.
pub fn get() -> &'static TurbineConfig {
    TURBINE_CONFIG
        .get()
        .expect("config::get() called before config::init() - this is a startup bug")
}

/// Check whether the config has been initialized.
///
/// Useful for tests and optional config paths.
pub fn is_initialized() -> bool {
    TURBINE_CONFIG.get().is_some()
}
