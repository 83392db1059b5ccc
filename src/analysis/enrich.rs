//! Record enrichment
//!
//! Derives the analysis fields (expected power, operational status) for every
//! raw measurement record. Total, pure and order-preserving: the output has
//! the same length and relative order as the input, and one bad record never
//! aborts the pass - missing fields propagate as `None`/`Unknown`.

use crate::config::ClassifierThresholds;
use crate::types::{EnrichedRecord, MeasurementRecord, PowerCurve};

use super::classify::classify_with;

/// Enrich a single record against the contractual curve.
pub fn enrich_record(
    curve: &PowerCurve,
    thresholds: &ClassifierThresholds,
    record: &MeasurementRecord,
) -> EnrichedRecord {
    let record = record.normalized();
    EnrichedRecord {
        timestamp: record.timestamp,
        wind_speed: record.wind_speed,
        power: record.power,
        expected_power: record.wind_speed.and_then(|ws| curve.expected_power(ws)),
        status: classify_with(thresholds, record.wind_speed, record.power),
    }
}

/// Enrich every record, preserving input order.
///
/// Curve validity (non-empty, strictly increasing) is enforced when the
/// [`PowerCurve`] is constructed, so enrichment itself cannot fail.
pub fn enrich_records(
    curve: &PowerCurve,
    thresholds: &ClassifierThresholds,
    records: &[MeasurementRecord],
) -> Vec<EnrichedRecord> {
    records
        .iter()
        .map(|r| enrich_record(curve, thresholds, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CurvePoint, OperationalStatus};
    use chrono::{TimeZone, Utc};

    fn curve() -> PowerCurve {
        PowerCurve::new(vec![
            CurvePoint {
                wind_speed: 0.0,
                power: 0.0,
            },
            CurvePoint {
                wind_speed: 10.0,
                power: 100.0,
            },
            CurvePoint {
                wind_speed: 20.0,
                power: 100.0,
            },
        ])
        .unwrap()
    }

    fn record(minute: u32, wind_speed: Option<f64>, power: Option<f64>) -> MeasurementRecord {
        MeasurementRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, minute, 0).unwrap(),
            wind_speed,
            power,
        }
    }

    #[test]
    fn enrichment_derives_expected_power_and_status() {
        let enriched = enrich_record(
            &curve(),
            &ClassifierThresholds::default(),
            &record(0, Some(5.0), Some(40.0)),
        );
        assert_eq!(enriched.expected_power, Some(50.0));
        assert_eq!(enriched.status, OperationalStatus::NormalOperation);
    }

    #[test]
    fn missing_wind_speed_propagates() {
        let enriched = enrich_record(
            &curve(),
            &ClassifierThresholds::default(),
            &record(0, None, Some(40.0)),
        );
        assert_eq!(enriched.expected_power, None);
        assert_eq!(enriched.status, OperationalStatus::Unknown);
    }

    #[test]
    fn nan_wind_speed_is_treated_as_missing() {
        let enriched = enrich_record(
            &curve(),
            &ClassifierThresholds::default(),
            &record(0, Some(f64::NAN), Some(40.0)),
        );
        assert_eq!(enriched.wind_speed, None);
        assert_eq!(enriched.expected_power, None);
        assert_eq!(enriched.status, OperationalStatus::Unknown);
    }

    #[test]
    fn batch_enrichment_preserves_length_and_order() {
        let records = vec![
            record(0, Some(1.0), Some(0.0)),
            record(10, Some(5.0), Some(0.0)),
            record(20, Some(20.0), Some(0.05)),
        ];
        let enriched = enrich_records(&curve(), &ClassifierThresholds::default(), &records);
        assert_eq!(enriched.len(), records.len());
        assert_eq!(enriched[0].status, OperationalStatus::BelowCutIn);
        assert_eq!(enriched[1].status, OperationalStatus::StopOrMaintenance);
        assert_eq!(enriched[2].status, OperationalStatus::HighWindStop);
        for (raw, cooked) in records.iter().zip(&enriched) {
            assert_eq!(raw.timestamp, cooked.timestamp);
        }
    }
}
