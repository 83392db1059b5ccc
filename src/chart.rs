//! Chart figure builder
//!
//! Assembles a Plotly-shaped JSON figure (traces + layout) for the
//! power-vs-wind-speed scatter, with optional per-status color grouping and
//! an optional contractual-curve overlay line. The figure is handed to an
//! external renderer as opaque JSON; no plotting happens here.

use serde_json::{json, Value};

use crate::types::{EnrichedRecord, OperationalStatus, PowerCurve};

/// Display options chosen in the UI
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    /// Group points into one trace per operational status
    pub color_by_status: bool,
    /// Marker opacity, 0.0-1.0
    pub opacity: f64,
    /// Overlay the contractual power curve as a dashed line
    pub show_curve: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            color_by_status: true,
            opacity: 0.6,
            show_curve: true,
        }
    }
}

fn scatter_trace(records: &[&EnrichedRecord], name: &str, opacity: f64) -> Value {
    let x: Vec<Value> = records
        .iter()
        .map(|r| r.wind_speed.map_or(Value::Null, |v| json!(v)))
        .collect();
    let y: Vec<Value> = records
        .iter()
        .map(|r| r.power.map_or(Value::Null, |v| json!(v)))
        .collect();
    // Timestamp, expected power and status ride along for hover display.
    let customdata: Vec<Value> = records
        .iter()
        .map(|r| {
            json!([
                r.timestamp.to_rfc3339(),
                r.expected_power,
                r.status.display_name(),
            ])
        })
        .collect();

    json!({
        "type": "scatter",
        "mode": "markers",
        "name": name,
        "x": x,
        "y": y,
        "customdata": customdata,
        "marker": { "opacity": opacity.clamp(0.0, 1.0) },
    })
}

/// Build the complete figure for a filtered subset.
pub fn build_figure(records: &[EnrichedRecord], curve: &PowerCurve, options: &ChartOptions) -> Value {
    let mut traces: Vec<Value> = Vec::new();

    if options.color_by_status {
        for status in OperationalStatus::CANONICAL_ORDER {
            let group: Vec<&EnrichedRecord> =
                records.iter().filter(|r| r.status == status).collect();
            if !group.is_empty() {
                traces.push(scatter_trace(&group, status.display_name(), options.opacity));
            }
        }
    } else {
        let all: Vec<&EnrichedRecord> = records.iter().collect();
        traces.push(scatter_trace(&all, "Measurements", options.opacity));
    }

    if options.show_curve {
        let x: Vec<f64> = curve.points().iter().map(|p| p.wind_speed).collect();
        let y: Vec<f64> = curve.points().iter().map(|p| p.power).collect();
        traces.push(json!({
            "type": "scatter",
            "mode": "lines",
            "name": "Contractual power curve",
            "x": x,
            "y": y,
            "line": { "color": "black", "width": 3, "dash": "dash" },
        }));
    }

    json!({
        "data": traces,
        "layout": {
            "title": "Power Curve Analysis: Actual vs Contractual Performance",
            "template": "plotly_white",
            "height": 600,
            "xaxis": { "title": "Wind Speed (m/s)" },
            "yaxis": { "title": "Normalized Power Output" },
            "legend": { "title": { "text": "" } },
            "margin": { "l": 10, "r": 10, "t": 50, "b": 10 },
        },
    })
}
