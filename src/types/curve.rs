//! Contractual power curve: validated reference data plus interpolation
//!
//! The contractual (vendor-specified) power curve maps wind speed to the
//! power the turbine is expected to produce at that speed. Expected power
//! for an arbitrary wind speed is answered by piecewise-linear interpolation
//! between the two bracketing curve points, with flat extrapolation outside
//! the curve's range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single point of the contractual power curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Contractual power at that wind speed (normalized kW)
    pub power: f64,
}

/// Errors rejecting an unusable reference curve at load time
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Reference curve is empty - at least one point is required")]
    Empty,

    #[error("Reference curve contains a non-finite value at wind speed {wind_speed}")]
    NonFinite { wind_speed: f64 },

    #[error("Reference curve has duplicate wind speed {wind_speed} - interpolation would be ambiguous")]
    DegenerateInterval { wind_speed: f64 },
}

/// Validated contractual power curve, sorted ascending by wind speed
///
/// Immutable once constructed. Construction sorts the input points and
/// rejects empty curves, non-finite values, and duplicate wind speeds, so
/// every `PowerCurve` in the system can interpolate without runtime guards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerCurve {
    points: Vec<CurvePoint>,
}

impl PowerCurve {
    /// Build a curve from unordered points.
    ///
    /// Sorts by wind speed, then validates:
    /// - at least one point (`CurveError::Empty`)
    /// - all values finite (`CurveError::NonFinite`)
    /// - strictly increasing wind speeds (`CurveError::DegenerateInterval`)
    pub fn new(mut points: Vec<CurvePoint>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        for p in &points {
            if !p.wind_speed.is_finite() || !p.power.is_finite() {
                return Err(CurveError::NonFinite {
                    wind_speed: p.wind_speed,
                });
            }
        }
        // All values are finite at this point, so total_cmp matches numeric order.
        points.sort_by(|a, b| a.wind_speed.total_cmp(&b.wind_speed));
        for pair in points.windows(2) {
            if pair[0].wind_speed == pair[1].wind_speed {
                return Err(CurveError::DegenerateInterval {
                    wind_speed: pair[0].wind_speed,
                });
            }
        }
        Ok(Self { points })
    }

    /// The curve points, sorted ascending by wind speed.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of points in the curve.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false - construction rejects empty curves.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Wind-speed range covered by the curve (min, max).
    pub fn wind_speed_range(&self) -> (f64, f64) {
        // Non-empty is a construction invariant.
        let first = self.points[0].wind_speed;
        let last = self.points[self.points.len() - 1].wind_speed;
        (first, last)
    }

    /// Expected (contractual) power at the given wind speed.
    ///
    /// Flat extrapolation outside the curve range: queries at or below the
    /// first point return the first point's power, queries at or above the
    /// last point return the last point's power. In between, linear
    /// interpolation over the bracketing pair.
    ///
    /// Non-finite queries (missing data) return `None` rather than failing.
    pub fn expected_power(&self, wind_speed: f64) -> Option<f64> {
        if !wind_speed.is_finite() {
            return None;
        }

        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if wind_speed <= first.wind_speed {
            return Some(first.power);
        }
        if wind_speed >= last.wind_speed {
            return Some(last.power);
        }

        // First point with wind_speed >= query, paired with its predecessor.
        let idx = self
            .points
            .partition_point(|p| p.wind_speed < wind_speed);
        let upper = self.points[idx];
        let lower = self.points[idx - 1];

        let dx = upper.wind_speed - lower.wind_speed;
        if dx <= 0.0 {
            // Unreachable after construction validation; deterministic fallback.
            return Some(lower.power);
        }
        let t = (wind_speed - lower.wind_speed) / dx;
        Some(lower.power + (upper.power - lower.power) * t)
    }
}
