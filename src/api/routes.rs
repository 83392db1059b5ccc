//! API route definitions
//!
//! Endpoints for the power-curve dashboard:
//! - /api/v1/records - filtered enriched records
//! - /api/v1/summary - summary statistics for the filter window
//! - /api/v1/curve   - contractual power curve points
//! - /api/v1/chart   - Plotly-shaped figure JSON

use axum::{routing::get, Router};

use super::handlers::{self, DashboardState};

/// Create all API routes for the dashboard
pub fn api_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/records", get(handlers::get_records))
        .route("/summary", get(handlers::get_summary))
        .route("/curve", get(handlers::get_curve))
        .route("/chart", get(handlers::get_chart))
        .with_state(state)
}

/// Health endpoint at root level
pub fn legacy_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierThresholds;
    use crate::dataset::AnalysisDataset;
    use crate::types::{CurvePoint, MeasurementRecord, PowerCurve};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> DashboardState {
        let curve = PowerCurve::new(vec![
            CurvePoint {
                wind_speed: 0.0,
                power: 0.0,
            },
            CurvePoint {
                wind_speed: 20.0,
                power: 100.0,
            },
        ])
        .unwrap();
        let raw = vec![MeasurementRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            wind_speed: Some(8.0),
            power: Some(35.0),
        }];
        DashboardState::new(Arc::new(AnalysisDataset::new(
            curve,
            &ClassifierThresholds::default(),
            &raw,
        )))
    }

    #[tokio::test]
    async fn test_api_routes_records() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/records")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_routes_summary() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_routes_curve() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(Request::builder().uri("/curve").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_routes_chart() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(Request::builder().uri("/chart").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_legacy_health() {
        let app = legacy_routes(create_test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
