//! API route handlers
//!
//! Request handling for the power-curve dashboard: filtered records, summary
//! statistics, the reference curve, and the chart figure. This layer owns the
//! UI-provider responsibilities: absent filter parameters default to the full
//! extent of the loaded data, and user-entered bounds are clamped to the data
//! extents before the filter runs.

use axum::extract::{Query, State};
use axum::response::Response;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analysis::{FilterCriteria, SummaryReport};
use crate::chart::{build_figure, ChartOptions};
use crate::dataset::AnalysisDataset;
use crate::types::{CurvePoint, EnrichedRecord};

use super::envelope::{ApiErrorResponse, ApiResponse};

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
///
/// The dataset is enriched once at startup and never mutated; every request
/// recomputes its filtered view from it.
#[derive(Clone)]
pub struct DashboardState {
    pub dataset: Arc<AnalysisDataset>,
}

impl DashboardState {
    pub fn new(dataset: Arc<AnalysisDataset>) -> Self {
        Self { dataset }
    }
}

// ============================================================================
// Filter parameters
// ============================================================================

/// Filter window as it arrives from the UI (all fields optional)
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// Inclusive start date, `YYYY-MM-DD`
    pub start: Option<String>,
    /// Inclusive end date, `YYYY-MM-DD`
    pub end: Option<String>,
    pub min_wind_speed: Option<f64>,
    pub max_wind_speed: Option<f64>,
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ApiErrorResponse::bad_request(format!(
            "Invalid {field} date '{value}' - expected YYYY-MM-DD"
        ))
    })
}

/// Resolve UI parameters into concrete criteria.
///
/// Dates are inclusive whole days: `start` begins at midnight, `end` runs to
/// 23:59:59. Missing fields default to the dataset's extents; everything is
/// clamped so a typo cannot widen the window past the loaded data.
fn resolve_criteria(
    dataset: &AnalysisDataset,
    params: &FilterParams,
) -> Result<Option<FilterCriteria>, Response> {
    let Some(full) = dataset.full_criteria() else {
        // Empty dataset - nothing can match any window.
        return Ok(None);
    };

    let mut criteria = full;
    if let Some(ref s) = params.start {
        let date = parse_date("start", s)?;
        criteria.start = date
            .and_hms_opt(0, 0, 0)
            .unwrap_or_default()
            .and_utc();
    }
    if let Some(ref s) = params.end {
        let date = parse_date("end", s)?;
        criteria.end = date
            .and_hms_opt(23, 59, 59)
            .unwrap_or_default()
            .and_utc();
    }
    if let Some(ws) = params.min_wind_speed {
        criteria.min_wind_speed = ws;
    }
    if let Some(ws) = params.max_wind_speed {
        criteria.max_wind_speed = ws;
    }
    if criteria.start > criteria.end {
        return Err(ApiErrorResponse::bad_request(
            "start date is after end date",
        ));
    }
    if criteria.min_wind_speed > criteria.max_wind_speed {
        return Err(ApiErrorResponse::bad_request(
            "min_wind_speed exceeds max_wind_speed",
        ));
    }
    Ok(Some(dataset.clamp_criteria(criteria)))
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    records_loaded: usize,
    curve_points: usize,
}

/// Liveness probe plus basic dataset shape.
pub async fn get_health(State(state): State<DashboardState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!(HealthResponse {
        status: "ok",
        records_loaded: state.dataset.records().len(),
        curve_points: state.dataset.curve().len(),
    }))
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Serialize)]
struct RecordsResponse {
    criteria: Option<FilterCriteria>,
    record_count: usize,
    records: Vec<EnrichedRecord>,
}

/// Filtered enriched records for charting or export.
pub async fn get_records(
    State(state): State<DashboardState>,
    Query(params): Query<FilterParams>,
) -> Response {
    let criteria = match resolve_criteria(&state.dataset, &params) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let records = criteria
        .as_ref()
        .map(|c| state.dataset.filtered(c))
        .unwrap_or_default();
    ApiResponse::ok(RecordsResponse {
        criteria,
        record_count: records.len(),
        records,
    })
}

// ============================================================================
// Summary
// ============================================================================

#[derive(Debug, Serialize)]
struct SummaryResponse {
    criteria: Option<FilterCriteria>,
    report: SummaryReport,
    /// Set when the filter matched nothing - a display hint, not an error
    message: Option<&'static str>,
}

/// Summary statistics for the current filter window.
pub async fn get_summary(
    State(state): State<DashboardState>,
    Query(params): Query<FilterParams>,
) -> Response {
    let criteria = match resolve_criteria(&state.dataset, &params) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let report = criteria
        .as_ref()
        .map(|c| state.dataset.summary(c))
        .unwrap_or_else(|| SummaryReport {
            record_count: 0,
            breakdown: Vec::new(),
        });
    let message = report.is_empty().then_some("No data in selected range");
    ApiResponse::ok(SummaryResponse {
        criteria,
        report,
        message,
    })
}

// ============================================================================
// Curve
// ============================================================================

#[derive(Debug, Serialize)]
struct CurveResponse {
    points: Vec<CurvePoint>,
}

/// The contractual power curve, for the dashboard's overlay line.
pub async fn get_curve(State(state): State<DashboardState>) -> Response {
    ApiResponse::ok(CurveResponse {
        points: state.dataset.curve().points().to_vec(),
    })
}

// ============================================================================
// Chart
// ============================================================================

/// Filter window plus display options for the chart endpoint
///
/// Filter fields are repeated rather than flattened - `serde(flatten)` does
/// not round-trip numeric query parameters through serde_urlencoded.
#[derive(Debug, Deserialize)]
pub struct ChartParams {
    pub start: Option<String>,
    pub end: Option<String>,
    pub min_wind_speed: Option<f64>,
    pub max_wind_speed: Option<f64>,
    pub color_by_status: Option<bool>,
    pub opacity: Option<f64>,
    pub show_curve: Option<bool>,
}

impl ChartParams {
    fn filter(&self) -> FilterParams {
        FilterParams {
            start: self.start.clone(),
            end: self.end.clone(),
            min_wind_speed: self.min_wind_speed,
            max_wind_speed: self.max_wind_speed,
        }
    }
}

/// Plotly-shaped figure JSON for the current filter window and options.
pub async fn get_chart(
    State(state): State<DashboardState>,
    Query(params): Query<ChartParams>,
) -> Response {
    let criteria = match resolve_criteria(&state.dataset, &params.filter()) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let records = criteria
        .as_ref()
        .map(|c| state.dataset.filtered(c))
        .unwrap_or_default();

    let defaults = ChartOptions::default();
    let options = ChartOptions {
        color_by_status: params.color_by_status.unwrap_or(defaults.color_by_status),
        opacity: params.opacity.unwrap_or(defaults.opacity),
        show_curve: params.show_curve.unwrap_or(defaults.show_curve),
    };
    ApiResponse::ok(build_figure(&records, state.dataset.curve(), &options))
}
