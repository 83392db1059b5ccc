//! CSV loaders for measurement records and the contractual curve
//!
//! Expected headers:
//! - records: `timestamp,wind_speed,power`
//! - curve:   `wind_speed,power`
//!
//! Timestamps accept RFC 3339 (`2024-06-01T12:00:00Z`), the common
//! space-separated export form (`2024-06-01 12:00:00`), and bare dates
//! (`2024-06-01`, taken as midnight UTC). Empty numeric cells become `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::path::Path;

use crate::types::{CurvePoint, MeasurementRecord, PowerCurve};

use super::AcquisitionError;

#[derive(Debug, Deserialize)]
struct RecordRow {
    timestamp: String,
    wind_speed: Option<f64>,
    power: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CurveRow {
    wind_speed: f64,
    power: f64,
}

/// Parse the timestamp formats seen in SCADA CSV exports.
///
/// Shared with the workbook loader for string-typed date cells.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Load measurement records from a CSV file.
pub fn load_records_csv(path: &Path) -> Result<Vec<MeasurementRecord>, AcquisitionError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| AcquisitionError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RecordRow>().enumerate() {
        let row = row?;
        let timestamp =
            parse_timestamp(&row.timestamp).ok_or_else(|| AcquisitionError::BadTimestamp {
                // +2: one for the header row, one for 1-based numbering.
                row: idx + 2,
                value: row.timestamp.clone(),
            })?;
        records.push(
            MeasurementRecord {
                timestamp,
                wind_speed: row.wind_speed,
                power: row.power,
            }
            .normalized(),
        );
    }
    Ok(records)
}

/// Load the contractual power curve from a CSV file.
///
/// An unusable curve (empty, duplicate wind speeds) is rejected here, before
/// any downstream computation runs.
pub fn load_curve_csv(path: &Path) -> Result<PowerCurve, AcquisitionError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| AcquisitionError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut points = Vec::new();
    for row in reader.deserialize::<CurveRow>() {
        let row = row?;
        points.push(CurvePoint {
            wind_speed: row.wind_speed,
            power: row.power,
        });
    }
    Ok(PowerCurve::new(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CurveError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_records_with_mixed_timestamp_formats() {
        let file = write_file(
            "timestamp,wind_speed,power\n\
             2024-06-01T00:10:00Z,4.2,18.5\n\
             2024-06-01 00:20:00,5.0,25.0\n\
             2024-06-02,6.1,33.0\n",
        );
        let records = load_records_csv(file.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].wind_speed, Some(4.2));
        assert_eq!(records[2].timestamp.to_rfc3339(), "2024-06-02T00:00:00+00:00");
    }

    #[test]
    fn empty_cells_become_none() {
        let file = write_file(
            "timestamp,wind_speed,power\n\
             2024-06-01T00:00:00Z,,25.0\n\
             2024-06-01T00:10:00Z,5.0,\n",
        );
        let records = load_records_csv(file.path()).unwrap();
        assert_eq!(records[0].wind_speed, None);
        assert_eq!(records[0].power, Some(25.0));
        assert_eq!(records[1].power, None);
    }

    #[test]
    fn bad_timestamp_reports_the_row() {
        let file = write_file(
            "timestamp,wind_speed,power\n\
             not-a-date,5.0,25.0\n",
        );
        let err = load_records_csv(file.path()).unwrap_err();
        assert!(matches!(err, AcquisitionError::BadTimestamp { row: 2, .. }));
    }

    #[test]
    fn loads_and_validates_the_curve() {
        let file = write_file(
            "wind_speed,power\n\
             10,100\n\
             0,0\n\
             20,100\n",
        );
        let curve = load_curve_csv(file.path()).unwrap();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.expected_power(5.0), Some(50.0));
    }

    #[test]
    fn duplicate_curve_rows_surface_as_curve_error() {
        let file = write_file(
            "wind_speed,power\n\
             5,10\n\
             5,20\n",
        );
        let err = load_curve_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            AcquisitionError::Curve(CurveError::DegenerateInterval { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_records_csv(Path::new("/nonexistent/records.csv")).unwrap_err();
        assert!(matches!(err, AcquisitionError::Open { .. }));
    }
}
