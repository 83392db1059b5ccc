//! Data acquisition
//!
//! Loads the two input tables - raw operational measurements and the
//! contractual power curve - from the formats SCADA systems actually hand
//! over: Excel workbook exports (`workbook`) and plain CSV files
//! (`csv_source`). Both loaders normalise missing/NaN cells into `None`
//! so one bad row never aborts a load.

pub mod csv_source;
pub mod workbook;

use std::path::PathBuf;
use thiserror::Error;

pub use csv_source::{load_curve_csv, load_records_csv};
pub use workbook::{load_workbook, CURVE_SHEET, RAW_DATA_SHEET};

/// Errors raised while loading input data
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("Failed to open {path}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("Workbook has no sheet named '{sheet}'")]
    MissingSheet { sheet: String },

    #[error("Sheet '{sheet}' is missing required column '{column}'")]
    MissingColumn { sheet: String, column: String },

    #[error("Row {row}: unparsable timestamp '{value}'")]
    BadTimestamp { row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid reference curve: {0}")]
    Curve(#[from] crate::types::CurveError),
}
