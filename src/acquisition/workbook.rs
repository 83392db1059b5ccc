//! Excel workbook loader for SCADA exports
//!
//! Reads the two-sheet workbook format the turbine operator hands over:
//! a `RawData` sheet (columns `Date`, `Wind speed`, `Power avg [kW]`) and a
//! `Contractual Power Curve` sheet (columns `Windspeed [m/s]`, `Power`).
//! Sheet and column names are matched case-insensitively after trimming.

use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::warn;

use crate::types::{CurvePoint, MeasurementRecord, PowerCurve};

use super::csv_source::parse_timestamp;
use super::AcquisitionError;

/// Sheet holding the raw measurement records.
pub const RAW_DATA_SHEET: &str = "RawData";
/// Sheet holding the contractual power curve.
pub const CURVE_SHEET: &str = "Contractual Power Curve";

const DATE_COLUMN: &str = "Date";
const WIND_SPEED_COLUMN: &str = "Wind speed";
const POWER_COLUMN: &str = "Power avg [kW]";
const CURVE_WIND_SPEED_COLUMN: &str = "Windspeed [m/s]";
const CURVE_POWER_COLUMN: &str = "Power";

/// Locate a column index by header name (trimmed, case-insensitive).
fn find_column(headers: &[Data], name: &str) -> Option<usize> {
    headers.iter().position(|cell| {
        cell.as_string()
            .is_some_and(|h| h.trim().eq_ignore_ascii_case(name))
    })
}

fn require_column(
    headers: &[Data],
    sheet: &str,
    column: &str,
) -> Result<usize, AcquisitionError> {
    find_column(headers, column).ok_or_else(|| AcquisitionError::MissingColumn {
        sheet: sheet.to_string(),
        column: column.to_string(),
    })
}

/// Pull a timestamp out of a cell: native Excel datetime first, then the
/// string formats the CSV loader accepts.
fn cell_timestamp(cell: &Data) -> Option<DateTime<Utc>> {
    if let Some(naive) = cell.as_datetime() {
        return Some(naive.and_utc());
    }
    cell.as_string().and_then(|s| parse_timestamp(&s))
}

fn sheet_range(
    workbook: &mut calamine::Sheets<std::io::BufReader<std::fs::File>>,
    sheet: &str,
) -> Result<Range<Data>, AcquisitionError> {
    workbook
        .worksheet_range(sheet)
        .map_err(|_| AcquisitionError::MissingSheet {
            sheet: sheet.to_string(),
        })
}

fn parse_records(range: &Range<Data>) -> Result<Vec<MeasurementRecord>, AcquisitionError> {
    let mut rows = range.rows();
    let headers = rows.next().ok_or_else(|| AcquisitionError::MissingColumn {
        sheet: RAW_DATA_SHEET.to_string(),
        column: DATE_COLUMN.to_string(),
    })?;
    let date_idx = require_column(headers, RAW_DATA_SHEET, DATE_COLUMN)?;
    let ws_idx = require_column(headers, RAW_DATA_SHEET, WIND_SPEED_COLUMN)?;
    let power_idx = require_column(headers, RAW_DATA_SHEET, POWER_COLUMN)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in rows {
        let Some(timestamp) = row.get(date_idx).and_then(cell_timestamp) else {
            // A row without a timestamp cannot be placed on the date axis.
            skipped += 1;
            continue;
        };
        records.push(
            MeasurementRecord {
                timestamp,
                wind_speed: row.get(ws_idx).and_then(DataType::as_f64),
                power: row.get(power_idx).and_then(DataType::as_f64),
            }
            .normalized(),
        );
    }
    if skipped > 0 {
        warn!(skipped, "Skipped rows without a parsable timestamp");
    }
    Ok(records)
}

fn parse_curve(range: &Range<Data>) -> Result<PowerCurve, AcquisitionError> {
    let mut rows = range.rows();
    let headers = rows.next().ok_or_else(|| AcquisitionError::MissingColumn {
        sheet: CURVE_SHEET.to_string(),
        column: CURVE_WIND_SPEED_COLUMN.to_string(),
    })?;
    let ws_idx = require_column(headers, CURVE_SHEET, CURVE_WIND_SPEED_COLUMN)?;
    let power_idx = require_column(headers, CURVE_SHEET, CURVE_POWER_COLUMN)?;

    let mut points = Vec::new();
    for row in rows {
        let ws = row.get(ws_idx).and_then(DataType::as_f64);
        let power = row.get(power_idx).and_then(DataType::as_f64);
        if let (Some(wind_speed), Some(power)) = (ws, power) {
            points.push(CurvePoint { wind_speed, power });
        }
    }
    Ok(PowerCurve::new(points)?)
}

/// Load both tables from a SCADA workbook export.
///
/// The curve is validated here, so a workbook that loads successfully is
/// guaranteed usable by the whole pipeline.
pub fn load_workbook(
    path: &Path,
) -> Result<(Vec<MeasurementRecord>, PowerCurve), AcquisitionError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| AcquisitionError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let raw_range = sheet_range(&mut workbook, RAW_DATA_SHEET)?;
    let curve_range = sheet_range(&mut workbook, CURVE_SHEET)?;

    let records = parse_records(&raw_range)?;
    let curve = parse_curve(&curve_range)?;
    Ok((records, curve))
}
