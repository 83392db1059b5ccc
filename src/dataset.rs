//! Loaded-once analysis dataset
//!
//! Pairs the contractual curve with the enriched record collection and the
//! data extents the UI layer uses for default filter bounds. Immutable after
//! construction - downstream filtering and aggregation never mutate it, so
//! it is shared freely behind an `Arc`.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::analysis::{enrich_records, filter_records, summarize, FilterCriteria, SummaryReport};
use crate::config::ClassifierThresholds;
use crate::types::{EnrichedRecord, MeasurementRecord, PowerCurve};

/// Min/max extents of the loaded data, for defaulting and clamping UI bounds
#[derive(Debug, Clone, Copy)]
pub struct DataExtents {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub min_wind_speed: f64,
    pub max_wind_speed: f64,
}

/// The enriched dataset plus everything the dashboard needs alongside it
#[derive(Debug)]
pub struct AnalysisDataset {
    curve: PowerCurve,
    records: Vec<EnrichedRecord>,
    extents: Option<DataExtents>,
}

impl AnalysisDataset {
    /// Enrich raw records against the curve and capture the data extents.
    ///
    /// Enrichment happens exactly once here; filtering and summarizing are
    /// recomputed per request from the enriched collection.
    pub fn new(
        curve: PowerCurve,
        thresholds: &ClassifierThresholds,
        raw: &[MeasurementRecord],
    ) -> Self {
        let records = enrich_records(&curve, thresholds, raw);
        let extents = FilterCriteria::full_range(&records).map(|c| DataExtents {
            start: c.start,
            end: c.end,
            min_wind_speed: c.min_wind_speed,
            max_wind_speed: c.max_wind_speed,
        });

        if let Some(e) = extents {
            info!(
                records = records.len(),
                from = %e.start.date_naive(),
                to = %e.end.date_naive(),
                "Data loaded and enriched"
            );
        } else {
            info!("Data loaded: 0 records");
        }

        Self {
            curve,
            records,
            extents,
        }
    }

    pub fn curve(&self) -> &PowerCurve {
        &self.curve
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn extents(&self) -> Option<DataExtents> {
        self.extents
    }

    /// Criteria spanning the whole dataset, if it is non-empty.
    pub fn full_criteria(&self) -> Option<FilterCriteria> {
        self.extents.map(|e| FilterCriteria {
            start: e.start,
            end: e.end,
            min_wind_speed: e.min_wind_speed,
            max_wind_speed: e.max_wind_speed,
        })
    }

    /// Clamp user-entered criteria to the loaded data extents.
    ///
    /// The UI layer owns bound validation; this keeps a typo like a year-3000
    /// end date from producing surprising windows while never widening what
    /// the operator asked for.
    pub fn clamp_criteria(&self, criteria: FilterCriteria) -> FilterCriteria {
        let Some(e) = self.extents else {
            return criteria;
        };
        FilterCriteria {
            start: criteria.start.max(e.start),
            end: criteria.end.min(e.end),
            min_wind_speed: criteria.min_wind_speed.max(e.min_wind_speed),
            max_wind_speed: criteria.max_wind_speed.min(e.max_wind_speed),
        }
    }

    /// Filtered sub-sequence for the given window.
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<EnrichedRecord> {
        filter_records(&self.records, criteria)
    }

    /// Summary statistics for the given window.
    pub fn summary(&self, criteria: &FilterCriteria) -> SummaryReport {
        summarize(&self.filtered(criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CurvePoint, OperationalStatus};
    use chrono::TimeZone;

    fn dataset() -> AnalysisDataset {
        let curve = PowerCurve::new(vec![
            CurvePoint {
                wind_speed: 0.0,
                power: 0.0,
            },
            CurvePoint {
                wind_speed: 10.0,
                power: 100.0,
            },
        ])
        .unwrap();
        let raw = vec![
            MeasurementRecord {
                timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
                wind_speed: Some(5.0),
                power: Some(40.0),
            },
            MeasurementRecord {
                timestamp: Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap(),
                wind_speed: Some(2.0),
                power: Some(0.0),
            },
        ];
        AnalysisDataset::new(curve, &ClassifierThresholds::default(), &raw)
    }

    #[test]
    fn dataset_enriches_once_and_exposes_extents() {
        let ds = dataset();
        assert_eq!(ds.records().len(), 2);
        assert_eq!(ds.records()[0].expected_power, Some(50.0));
        assert_eq!(ds.records()[1].status, OperationalStatus::BelowCutIn);

        let e = ds.extents().unwrap();
        assert_eq!(e.min_wind_speed, 2.0);
        assert_eq!(e.max_wind_speed, 5.0);
    }

    #[test]
    fn full_criteria_cover_every_record() {
        let ds = dataset();
        let c = ds.full_criteria().unwrap();
        assert_eq!(ds.filtered(&c).len(), 2);
    }

    #[test]
    fn clamping_never_widens_the_window() {
        let ds = dataset();
        let wide = FilterCriteria {
            start: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap(),
            min_wind_speed: -100.0,
            max_wind_speed: 100.0,
        };
        let clamped = ds.clamp_criteria(wide);
        let full = ds.full_criteria().unwrap();
        assert_eq!(clamped, full);

        let narrow = FilterCriteria {
            min_wind_speed: 3.0,
            max_wind_speed: 4.0,
            ..full
        };
        assert_eq!(ds.clamp_criteria(narrow), narrow);
    }

    #[test]
    fn summary_reflects_the_window() {
        let ds = dataset();
        let full = ds.full_criteria().unwrap();
        assert_eq!(ds.summary(&full).record_count, 2);

        let narrow = FilterCriteria {
            min_wind_speed: 4.0,
            ..full
        };
        let report = ds.summary(&narrow);
        assert_eq!(report.record_count, 1);
        assert_eq!(
            report.breakdown[0].status,
            OperationalStatus::NormalOperation
        );
    }
}
