//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::snow::EstimateError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/depth", get(depth))
        .route("/api/stations", get(stations))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the current depth range.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let report = state.estimator.report().await.map_err(AppError::page)?;

    let template = IndexTemplate::from_report(&report, &state.directory);
    let html = template.render().map_err(|e| AppError::Page {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("Template error: {e}"),
    })?;

    Ok(Html(html))
}

/// Current depth range and per-station estimates as JSON.
async fn depth(State(state): State<AppState>) -> Result<Json<DepthResponse>, AppError> {
    let report = state.estimator.report().await.map_err(AppError::api)?;
    Ok(Json(DepthResponse::from_report(&report, &state.directory)))
}

/// Metadata for the configured stations.
async fn stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state.directory.lookup_all(state.estimator.stations());
    Json(StationsResponse { stations })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Error on a page route, rendered as HTML
    Page { status: StatusCode, message: String },
    /// Error on an API route, rendered as JSON
    Api { status: StatusCode, message: String },
}

impl AppError {
    // Estimation failures are always server errors: requests carry no
    // parameters that could be wrong.
    fn page(err: EstimateError) -> Self {
        AppError::Page {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }

    fn api(err: EstimateError) -> Self {
        AppError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Page { status, message } => {
                error!(%status, %message, "page request failed");
                let template = ErrorTemplate {
                    title: "Snow depth unavailable".to_string(),
                    message,
                };
                let html = template
                    .render()
                    .unwrap_or_else(|e| format!("Template error: {e}"));
                (status, Html(html)).into_response()
            }
            AppError::Api { status, message } => {
                error!(%status, %message, "API request failed");
                (status, Json(ErrorResponse { error: message })).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::awdb::{AwdbSource, MockAwdbClient};
    use crate::domain::StationTriplet;
    use crate::snow::{EstimatorConfig, SnowDepthEstimator};
    use crate::stations::StationDirectory;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::ServiceExt;

    /// Two stations with fresh readings, one with a stale, fully
    /// suspect series. Dates are irrelevant to the mock.
    const DATA: &str = r#"[
        {
            "stationTriplet": "1:CO:SNTL",
            "data": [{
                "stationElement": {"elementCode": "SNWD"},
                "values": [
                    {"date": "2024-01-10 06:00", "value": 10, "qcFlag": "V"},
                    {"date": "2024-01-10 07:00", "value": 99, "qcFlag": "S"},
                    {"date": "2024-01-10 08:00", "value": 12, "qcFlag": "V"},
                    {"date": "2024-01-10 09:00", "value": 11, "qcFlag": "V"}
                ]
            }]
        },
        {
            "stationTriplet": "2:CO:SNTL",
            "data": [{
                "stationElement": {"elementCode": "SNWD"},
                "values": [{"date": "2024-01-10 09:00", "value": 18, "qcFlag": "V"}]
            }]
        },
        {
            "stationTriplet": "3:CO:SNTL",
            "data": [{
                "stationElement": {"elementCode": "SNWD"},
                "values": [{"date": "2024-01-10 09:00", "value": 50, "qcFlag": "S"}]
            }]
        }
    ]"#;

    const STATIONS: &str = r#"[
        {"stationTriplet": "1:CO:SNTL", "name": "Bear Lake", "elevation": 9520},
        {"stationTriplet": "2:CO:SNTL", "name": "Berthoud Summit", "elevation": 11300}
    ]"#;

    async fn app(stations: &[&str]) -> (Router, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.json"), DATA).unwrap();
        std::fs::write(dir.path().join("stations.json"), STATIONS).unwrap();

        let source = AwdbSource::Mock(MockAwdbClient::new(dir.path()).unwrap());
        let triplets: Vec<StationTriplet> = stations.iter().map(|s| StationTriplet::new(*s)).collect();
        let directory = StationDirectory::fetch(&source, &triplets).await.unwrap();
        let estimator = SnowDepthEstimator::new(source, EstimatorConfig::new(triplets));

        let router = create_router(AppState::new(estimator, directory), dir.path());
        (router, dir)
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_check() {
        let (router, _dir) = app(&["1:CO:SNTL"]).await;
        let (status, body) = get(router, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn depth_api_reports_range() {
        let (router, _dir) = app(&["1:CO:SNTL", "2:CO:SNTL"]).await;
        let (status, body) = get(router, "/api/depth").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["range"], "12\" - 18\"");
        assert_eq!(json["stations"][0]["name"], "Bear Lake");
        assert_eq!(json["stations"][0]["depth"], 12.0);
        assert_eq!(json["stations"][0]["readings"], 3);
    }

    #[tokio::test]
    async fn index_page_renders() {
        let (router, _dir) = app(&["1:CO:SNTL", "2:CO:SNTL"]).await;
        let (status, body) = get(router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Bear Lake"));
        assert!(body.contains("Berthoud Summit"));
        assert!(body.contains("9520 ft"));
    }

    #[tokio::test]
    async fn offline_station_is_a_server_error() {
        let (router, _dir) = app(&["1:CO:SNTL", "3:CO:SNTL"]).await;
        let (status, body) = get(router, "/api/depth").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "station 3:CO:SNTL is offline or out of order");
    }

    #[tokio::test]
    async fn offline_station_renders_error_page() {
        let (router, _dir) = app(&["3:CO:SNTL"]).await;
        let (status, body) = get(router, "/").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Snow depth unavailable"));
    }

    #[tokio::test]
    async fn no_stations_is_a_server_error() {
        let (router, _dir) = app(&[]).await;
        let (status, body) = get(router, "/api/depth").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("no stations to estimate"));
    }

    #[tokio::test]
    async fn stations_api_lists_known_metadata() {
        let (router, _dir) = app(&["2:CO:SNTL", "3:CO:SNTL", "1:CO:SNTL"]).await;
        let (status, body) = get(router, "/api/stations").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let stations = json["stations"].as_array().unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0]["name"], "Berthoud Summit");
        assert_eq!(stations[0]["triplet"], "2:CO:SNTL");
        assert_eq!(stations[1]["name"], "Bear Lake");
    }
}
