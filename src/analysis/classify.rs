//! Operational-status classification
//!
//! Maps (wind speed, power) to exactly one [`OperationalStatus`], evaluated
//! in precedence order (first match wins):
//!
//! 1. power stopped AND wind at/above cut-in  -> Stop/Maintenance
//! 2. wind below cut-in                        -> Below cut-in
//! 3. wind above cut-out AND near-zero power   -> High wind stop
//! 4. otherwise                                -> Normal operation
//!
//! A record missing either input classifies as `Unknown` - NaN must never
//! flow silently through the comparisons.

use crate::config::ClassifierThresholds;
use crate::types::OperationalStatus;

/// Classify one record against explicit thresholds.
///
/// Pure function of its inputs; the precedence order above is load-bearing.
/// Note the rule-order subtlety: a stopped turbine below cut-in is
/// `BelowCutIn`, not `StopOrMaintenance`, because rule 1 requires wind at
/// or above cut-in.
pub fn classify_with(
    thresholds: &ClassifierThresholds,
    wind_speed: Option<f64>,
    power: Option<f64>,
) -> OperationalStatus {
    let (Some(ws), Some(p)) = (wind_speed, power) else {
        return OperationalStatus::Unknown;
    };
    if !ws.is_finite() || !p.is_finite() {
        return OperationalStatus::Unknown;
    }

    if p == thresholds.stopped_power && ws >= thresholds.cut_in_speed_ms {
        return OperationalStatus::StopOrMaintenance;
    }
    if ws < thresholds.cut_in_speed_ms {
        return OperationalStatus::BelowCutIn;
    }
    if ws > thresholds.high_wind_speed_ms && p < thresholds.high_wind_power_max {
        return OperationalStatus::HighWindStop;
    }
    OperationalStatus::NormalOperation
}

/// Classify using the globally configured thresholds.
pub fn classify(wind_speed: Option<f64>, power: Option<f64>) -> OperationalStatus {
    classify_with(&crate::config::get().thresholds, wind_speed, power)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ws: f64, p: f64) -> OperationalStatus {
        classify_with(&ClassifierThresholds::default(), Some(ws), Some(p))
    }

    #[test]
    fn below_cut_in_regardless_of_power() {
        assert_eq!(run(2.0, 0.0), OperationalStatus::BelowCutIn);
        assert_eq!(run(2.0, 12.0), OperationalStatus::BelowCutIn);
        assert_eq!(run(2.9, 500.0), OperationalStatus::BelowCutIn);
    }

    #[test]
    fn stopped_above_cut_in_is_stop_or_maintenance() {
        assert_eq!(run(5.0, 0.0), OperationalStatus::StopOrMaintenance);
        // Boundary: wind exactly at cut-in still counts as rule 1.
        assert_eq!(run(3.0, 0.0), OperationalStatus::StopOrMaintenance);
    }

    #[test]
    fn stopped_below_cut_in_falls_through_to_below_cut_in() {
        // Rule 1 requires wind >= cut-in, so a stopped turbine at 1 m/s
        // classifies by rule 2.
        assert_eq!(run(1.0, 0.0), OperationalStatus::BelowCutIn);
    }

    #[test]
    fn high_wind_with_trickle_power_is_high_wind_stop() {
        assert_eq!(run(20.0, 0.05), OperationalStatus::HighWindStop);
        assert_eq!(run(15.1, 0.09), OperationalStatus::HighWindStop);
    }

    #[test]
    fn high_wind_boundary_is_exclusive() {
        // Exactly 15 m/s is not "above cut-out".
        assert_eq!(run(15.0, 0.05), OperationalStatus::NormalOperation);
        // Power at the threshold is not "below" it.
        assert_eq!(run(20.0, 0.1), OperationalStatus::NormalOperation);
    }

    #[test]
    fn producing_turbine_is_normal() {
        assert_eq!(run(10.0, 500.0), OperationalStatus::NormalOperation);
        assert_eq!(run(3.0, 0.5), OperationalStatus::NormalOperation);
    }

    #[test]
    fn missing_inputs_are_unknown() {
        let t = ClassifierThresholds::default();
        assert_eq!(
            classify_with(&t, None, Some(10.0)),
            OperationalStatus::Unknown
        );
        assert_eq!(
            classify_with(&t, Some(10.0), None),
            OperationalStatus::Unknown
        );
        assert_eq!(
            classify_with(&t, Some(f64::NAN), Some(1.0)),
            OperationalStatus::Unknown
        );
    }

    #[test]
    fn custom_thresholds_shift_the_boundaries() {
        let t = ClassifierThresholds {
            cut_in_speed_ms: 4.0,
            high_wind_speed_ms: 22.0,
            high_wind_power_max: 0.5,
            stopped_power: 0.0,
        };
        assert_eq!(
            classify_with(&t, Some(3.5), Some(10.0)),
            OperationalStatus::BelowCutIn
        );
        assert_eq!(
            classify_with(&t, Some(20.0), Some(0.05)),
            OperationalStatus::NormalOperation
        );
        assert_eq!(
            classify_with(&t, Some(23.0), Some(0.4)),
            OperationalStatus::HighWindStop
        );
    }
}
