//! Windcurve - Wind-Turbine Power-Curve Analysis
//!
//! Loads a SCADA export (Excel workbook or CSV pair), enriches every record
//! with expected power and operational status, then either prints a summary
//! report or serves the dashboard API.
//!
//! # Usage
//!
//! ```bash
//! # Serve the dashboard from a workbook export
//! windcurve --xlsx POE_Task.xlsx
//!
//! # CSV pair instead of a workbook
//! windcurve --csv records.csv --curve power_curve.csv
//!
//! # One-shot summary to stdout, no server
//! windcurve --xlsx POE_Task.xlsx --summary
//! ```
//!
//! # Environment Variables
//!
//! - `WINDCURVE_CONFIG`: path to a turbine_config.toml
//! - `WINDCURVE_SERVER_ADDR`: override the bind address
//! - `RUST_LOG`: logging level (default: info)

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use windcurve::acquisition::{load_curve_csv, load_records_csv, load_workbook};
use windcurve::api::{create_app, DashboardState};
use windcurve::config::{self, TurbineConfig};
use windcurve::dataset::AnalysisDataset;
use windcurve::types::{MeasurementRecord, PowerCurve};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "windcurve")]
#[command(about = "Wind-turbine power-curve analysis dashboard")]
#[command(version)]
struct CliArgs {
    /// Excel workbook with RawData and Contractual Power Curve sheets
    #[arg(long, value_name = "PATH", conflicts_with_all = ["csv", "curve"])]
    xlsx: Option<PathBuf>,

    /// CSV file with measurement records (timestamp,wind_speed,power)
    #[arg(long, value_name = "PATH", requires = "curve")]
    csv: Option<PathBuf>,

    /// CSV file with the contractual curve (wind_speed,power)
    #[arg(long, value_name = "PATH", requires = "csv")]
    curve: Option<PathBuf>,

    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Print the full-range summary report and exit without serving
    #[arg(long)]
    summary: bool,
}

// ============================================================================
// Data loading
// ============================================================================

fn load_inputs(args: &CliArgs) -> Result<(Vec<MeasurementRecord>, PowerCurve)> {
    if let Some(ref path) = args.xlsx {
        info!(path = %path.display(), "Loading workbook export");
        return load_workbook(path)
            .with_context(|| format!("Failed to load workbook {}", path.display()));
    }
    if let (Some(records_path), Some(curve_path)) = (&args.csv, &args.curve) {
        info!(
            records = %records_path.display(),
            curve = %curve_path.display(),
            "Loading CSV pair"
        );
        let records = load_records_csv(records_path)
            .with_context(|| format!("Failed to load records from {}", records_path.display()))?;
        let curve = load_curve_csv(curve_path)
            .with_context(|| format!("Failed to load curve from {}", curve_path.display()))?;
        return Ok((records, curve));
    }
    bail!("No input given - pass --xlsx <PATH> or --csv <PATH> --curve <PATH>");
}

// ============================================================================
// Summary printing
// ============================================================================

fn print_summary(dataset: &AnalysisDataset) {
    let Some(criteria) = dataset.full_criteria() else {
        println!("No data loaded.");
        return;
    };
    let report = dataset.summary(&criteria);

    println!("Records: {}", report.record_count);
    println!(
        "Date range: {} to {}",
        criteria.start.date_naive(),
        criteria.end.date_naive()
    );
    println!(
        "Wind range: {:.1} - {:.1} m/s",
        criteria.min_wind_speed, criteria.max_wind_speed
    );
    println!("Status distribution:");
    for entry in &report.breakdown {
        println!(
            "  {}: {} ({:.1}%)",
            entry.status.display_name(),
            entry.count,
            entry.percentage
        );
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    // Load turbine configuration
    let turbine_config = TurbineConfig::load();
    info!(
        "Turbine: {} | Model: {} | Cut-in: {:.1} m/s | Cut-out: {:.1} m/s",
        turbine_config.turbine.name,
        if turbine_config.turbine.model.is_empty() {
            "unset"
        } else {
            &turbine_config.turbine.model
        },
        turbine_config.thresholds.cut_in_speed_ms,
        turbine_config.thresholds.high_wind_speed_ms,
    );
    let thresholds = turbine_config.thresholds;
    let server_addr = args
        .addr
        .clone()
        .or_else(|| std::env::var("WINDCURVE_SERVER_ADDR").ok())
        .unwrap_or_else(|| turbine_config.server.addr.clone());
    config::init(turbine_config);

    // Load and enrich once; downstream views recompute per request.
    let (records, curve) = load_inputs(&args)?;
    let dataset = Arc::new(AnalysisDataset::new(curve, &thresholds, &records));

    if args.summary {
        print_summary(&dataset);
        return Ok(());
    }

    let state = DashboardState::new(dataset);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind {server_addr}"))?;
    info!(addr = %server_addr, "Dashboard API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received Ctrl+C, shutting down");
        })
        .await
        .context("HTTP server error")?;

    info!("Windcurve shutdown complete");
    Ok(())
}
