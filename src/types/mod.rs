//! Core domain types for power-curve analysis
//!
//! - `curve` - contractual power curve with validation and interpolation
//! - `record` - raw and enriched measurement records
//! - `status` - operational-status categories

pub mod curve;
pub mod record;
pub mod status;

pub use curve::{CurveError, CurvePoint, PowerCurve};
pub use record::{EnrichedRecord, MeasurementRecord};
pub use status::OperationalStatus;
