//! Summary statistics over a filtered subset
//!
//! Computes the record count and a per-status breakdown (count + percentage)
//! for whatever subset the filter produced. Categories iterate in
//! [`OperationalStatus::CANONICAL_ORDER`] so the display order is stable
//! across runs; only categories actually present are listed.

use serde::{Deserialize, Serialize};

use crate::types::{EnrichedRecord, OperationalStatus};

/// Per-status slice of a [`SummaryReport`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub status: OperationalStatus,
    pub count: usize,
    /// Share of the filtered subset, 0-100
    pub percentage: f64,
}

/// Aggregated statistics for a filtered subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub record_count: usize,
    /// Present categories in canonical order; empty when `record_count` is 0
    pub breakdown: Vec<StatusBreakdown>,
}

impl SummaryReport {
    /// Whether the filter matched nothing - a "no data" display, not an error.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Summarize a filtered subset.
#[allow(clippy::cast_precision_loss)]
pub fn summarize(records: &[EnrichedRecord]) -> SummaryReport {
    let record_count = records.len();
    if record_count == 0 {
        return SummaryReport {
            record_count: 0,
            breakdown: Vec::new(),
        };
    }

    let breakdown = OperationalStatus::CANONICAL_ORDER
        .iter()
        .filter_map(|&status| {
            let count = records.iter().filter(|r| r.status == status).count();
            (count > 0).then(|| StatusBreakdown {
                status,
                count,
                percentage: 100.0 * count as f64 / record_count as f64,
            })
        })
        .collect();

    SummaryReport {
        record_count,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn rec(status: OperationalStatus) -> EnrichedRecord {
        EnrichedRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            wind_speed: Some(5.0),
            power: Some(1.0),
            expected_power: Some(1.0),
            status,
        }
    }

    #[test]
    fn counts_and_percentages() {
        let records = vec![
            rec(OperationalStatus::NormalOperation),
            rec(OperationalStatus::NormalOperation),
            rec(OperationalStatus::NormalOperation),
            rec(OperationalStatus::StopOrMaintenance),
        ];
        let report = summarize(&records);
        assert_eq!(report.record_count, 4);
        assert_eq!(report.breakdown.len(), 2);

        let stop = &report.breakdown[0];
        assert_eq!(stop.status, OperationalStatus::StopOrMaintenance);
        assert_eq!(stop.count, 1);
        assert!((stop.percentage - 25.0).abs() < 1e-9);

        let normal = &report.breakdown[1];
        assert_eq!(normal.status, OperationalStatus::NormalOperation);
        assert_eq!(normal.count, 3);
        assert!((normal.percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let records = vec![
            rec(OperationalStatus::BelowCutIn),
            rec(OperationalStatus::HighWindStop),
            rec(OperationalStatus::HighWindStop),
            rec(OperationalStatus::NormalOperation),
            rec(OperationalStatus::Unknown),
            rec(OperationalStatus::NormalOperation),
            rec(OperationalStatus::NormalOperation),
        ];
        let report = summarize(&records);
        let total: f64 = report.breakdown.iter().map(|b| b.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_follows_canonical_order() {
        let records = vec![
            rec(OperationalStatus::Unknown),
            rec(OperationalStatus::NormalOperation),
            rec(OperationalStatus::StopOrMaintenance),
        ];
        let statuses: Vec<_> = summarize(&records)
            .breakdown
            .iter()
            .map(|b| b.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                OperationalStatus::StopOrMaintenance,
                OperationalStatus::NormalOperation,
                OperationalStatus::Unknown,
            ]
        );
    }

    #[test]
    fn empty_subset_yields_empty_breakdown() {
        let report = summarize(&[]);
        assert!(report.is_empty());
        assert!(report.breakdown.is_empty());
    }

    #[test]
    fn absent_categories_are_omitted() {
        let records = vec![rec(OperationalStatus::NormalOperation)];
        let report = summarize(&records);
        assert_eq!(report.breakdown.len(), 1);
    }
}
