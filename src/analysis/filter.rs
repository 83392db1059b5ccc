//! Range filtering over enriched records
//!
//! Selects the sub-sequence of records matching a date window and a
//! wind-speed window. Both windows are inclusive on both ends. Records with
//! a missing wind speed fail the wind-speed predicate and are excluded.
//! Order-preserving; an empty result is a valid value, not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::EnrichedRecord;

/// Filter window supplied by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive start of the date window
    pub start: DateTime<Utc>,
    /// Inclusive end of the date window
    pub end: DateTime<Utc>,
    /// Inclusive lower wind-speed bound (m/s)
    pub min_wind_speed: f64,
    /// Inclusive upper wind-speed bound (m/s)
    pub max_wind_speed: f64,
}

impl FilterCriteria {
    /// Criteria spanning the full extent of a dataset - the UI's default
    /// widget values before the operator narrows anything down.
    ///
    /// Returns `None` for an empty dataset (no extents to span).
    pub fn full_range(records: &[EnrichedRecord]) -> Option<Self> {
        let first = records.first()?;
        let mut start = first.timestamp;
        let mut end = first.timestamp;
        let mut min_ws = f64::INFINITY;
        let mut max_ws = f64::NEG_INFINITY;

        for r in records {
            start = start.min(r.timestamp);
            end = end.max(r.timestamp);
            if let Some(ws) = r.wind_speed {
                min_ws = min_ws.min(ws);
                max_ws = max_ws.max(ws);
            }
        }
        if min_ws > max_ws {
            // No record carried a wind speed; fall back to a window that
            // excludes nothing on the wind-speed axis.
            min_ws = f64::NEG_INFINITY;
            max_ws = f64::INFINITY;
        }
        Some(Self {
            start,
            end,
            min_wind_speed: min_ws,
            max_wind_speed: max_ws,
        })
    }

    /// Whether a single record falls inside both windows.
    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        if record.timestamp < self.start || record.timestamp > self.end {
            return false;
        }
        match record.wind_speed {
            Some(ws) => ws >= self.min_wind_speed && ws <= self.max_wind_speed,
            None => false,
        }
    }
}

/// Filter the enriched dataset, preserving original order.
pub fn filter_records(records: &[EnrichedRecord], criteria: &FilterCriteria) -> Vec<EnrichedRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .copied()
        .collect()
}
