//! Windcurve: wind-turbine power-curve analysis
//!
//! Loads turbine operational data and a contractual reference power curve,
//! derives per-record expected power and an operational-status
//! classification, and serves filtered views, summary statistics, and chart
//! figures to an external dashboard.
//!
//! ## Pipeline
//!
//! raw records + reference curve -> enrich (interpolate + classify)
//! -> filter (date / wind-speed window) -> summarize / chart

pub mod acquisition;
pub mod analysis;
pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod types;

// Re-export turbine configuration
pub use config::TurbineConfig;

// Re-export commonly used types
pub use types::{
    CurveError, CurvePoint, EnrichedRecord, MeasurementRecord, OperationalStatus, PowerCurve,
};

// Re-export the pipeline surface
pub use analysis::{FilterCriteria, StatusBreakdown, SummaryReport};
pub use dataset::AnalysisDataset;
