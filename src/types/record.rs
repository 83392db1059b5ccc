//! Measurement record types
//!
//! `MeasurementRecord` is the raw SCADA row as loaded from the data source;
//! `EnrichedRecord` adds the derived expected power and operational status.
//! Both are immutable after creation - re-deriving an enriched dataset is
//! cheap and always preferred over patching one in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OperationalStatus;

/// One raw operational measurement from the turbine SCADA export
///
/// `wind_speed` and `power` are `Option` because source spreadsheets contain
/// missing cells; a missing value propagates to an undefined expected power
/// and an `Unknown` status instead of aborting the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Measurement timestamp (10-minute SCADA averages in the source data)
    pub timestamp: DateTime<Utc>,
    /// Average wind speed over the interval (m/s)
    pub wind_speed: Option<f64>,
    /// Average power produced over the interval (normalized kW)
    pub power: Option<f64>,
}

impl MeasurementRecord {
    /// Normalize NaN values from the source into `None`.
    ///
    /// Loaders call this once so the rest of the pipeline never sees NaN
    /// flowing silently through comparisons.
    pub fn normalized(mut self) -> Self {
        if self.wind_speed.is_some_and(|v| !v.is_finite()) {
            self.wind_speed = None;
        }
        if self.power.is_some_and(|v| !v.is_finite()) {
            self.power = None;
        }
        self
    }
}

/// A measurement record enriched with derived analysis fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub timestamp: DateTime<Utc>,
    pub wind_speed: Option<f64>,
    pub power: Option<f64>,
    /// Contractual power at this record's wind speed (None when wind speed is missing)
    pub expected_power: Option<f64>,
    /// Operational-status classification for this record
    pub status: OperationalStatus,
}

impl EnrichedRecord {
    /// Shortfall of measured power against the contractual expectation.
    ///
    /// Positive when the turbine under-performs the curve. `None` when
    /// either side is missing.
    pub fn power_deficit(&self) -> Option<f64> {
        match (self.expected_power, self.power) {
            (Some(expected), Some(actual)) => Some(expected - actual),
            _ => None,
        }
    }
}
