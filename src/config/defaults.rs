//! Built-in classification constants.
//!
//! These match the contractual reference turbine and are the fallback when
//! no `turbine_config.toml` is present. Different turbine models recalibrate
//! them through configuration, never by editing the rule logic.

/// Cut-in wind speed (m/s) - below this the turbine is not expected to produce.
pub const CUT_IN_SPEED_MS: f64 = 3.0;

/// High-wind (cut-out) speed (m/s) - above this a safety stop is expected.
pub const HIGH_WIND_SPEED_MS: f64 = 15.0;

/// Power below this at high wind counts as a high-wind stop (normalized kW).
pub const HIGH_WIND_POWER_MAX: f64 = 0.1;

/// Power reading that counts as fully stopped (normalized kW).
///
/// SCADA exports report exactly 0 for a stopped interval, so the rule
/// compares for equality rather than a band.
pub const STOPPED_POWER: f64 = 0.0;

/// Default HTTP server bind address.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";
