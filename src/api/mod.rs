//! HealthBot REST API
//!
//! HTTP API layer for HealthBot, built with Axum.
//!
//! # Endpoints
//!
//! ## BMI
//! - `POST /api/v1/bmi` - Evaluate height/weight
//! - `GET /api/v1/bmi/scale` - Reference scale bands
//!
//! ## Dataset
//! - `GET /api/v1/dataset` - Synthetic records (`?limit=N`)
//! - `GET /api/v1/dataset/columns` - Numeric columns
//! - `GET /api/v1/dataset/export` - CSV export
//! - `GET /api/v1/dataset/stats/:metric` - Column summary
//! - `GET /api/v1/dataset/distribution/:metric` - Histogram + box plot (`?bins=N`)
//! - `GET /api/v1/dataset/trend/:metric` - Metric by age
//! - `GET /api/v1/dataset/correlations` - Correlation matrix
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard` - Home page sample series
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use healthbot::api::{serve, AppState};
//! use healthbot::config::ApiConfig;
//! use healthbot::dataset::{Dataset, DatasetConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::generate(DatasetConfig::default()));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // BMI routes
        .route("/bmi", post(routes::bmi::evaluate_bmi))
        .route("/bmi/scale", get(routes::bmi::get_scale))
        // Dataset routes
        .route("/dataset", get(routes::dataset::list_records))
        .route("/dataset/columns", get(routes::dataset::list_columns))
        .route("/dataset/export", get(routes::dataset::export_csv))
        .route("/dataset/stats/:metric", get(routes::dataset::column_stats))
        .route(
            "/dataset/distribution/:metric",
            get(routes::dataset::column_distribution),
        )
        .route("/dataset/trend/:metric", get(routes::dataset::column_trend))
        .route("/dataset/correlations", get(routes::dataset::correlations))
        // Dashboard routes
        .route("/dashboard", get(routes::dashboard::get_dashboard));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let timeout = state.config.request_timeout();

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured, otherwise an allow-list
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HealthBot API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("HealthBot API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DatasetConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = Arc::new(Dataset::generate(DatasetConfig::default()));
        let state = AppState::new(dataset, ApiConfig::default());
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health_probes() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let (status, _) = get(create_test_app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_zero_timeout_still_serves() {
        let dataset = Arc::new(Dataset::generate(DatasetConfig::default()));
        let config = ApiConfig {
            request_timeout_secs: 0,
            ..ApiConfig::default()
        };
        let app = build_router(AppState::new(dataset, config));

        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_bmi_normal() {
        let (status, body) =
            post_json(create_test_app(), "/api/v1/bmi", r#"{"height": 1.65, "weight": 65.0}"#)
                .await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["category"], "normal");
        assert_eq!(json["category_label"], "Normal weight");
        assert_eq!(json["severity"], "success");
        let bmi = json["bmi"].as_f64().unwrap();
        assert!((bmi - 23.88).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_bmi_out_of_range() {
        let (status, body) =
            post_json(create_test_app(), "/api/v1/bmi", r#"{"height": 3.0, "weight": 65.0}"#)
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["request_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_bmi_invalid_json() {
        let (status, _) = post_json(create_test_app(), "/api/v1/bmi", "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_bmi_missing_field_is_json_error() {
        let (status, body) =
            post_json(create_test_app(), "/api/v1/bmi", r#"{"height": 1.65}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("weight"));
        assert!(json["request_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_bad_query_is_json_error() {
        for uri in [
            "/api/v1/dataset?limit=abc",
            "/api/v1/dataset/distribution/BMI?bins=-1",
        ] {
            let (status, body) = get(create_test_app(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);

            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["error"]["code"], "VALIDATION_ERROR", "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_scale() {
        let (status, body) = get(create_test_app(), "/api/v1/bmi/scale").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["bands"].as_array().unwrap().len(), 4);
        assert_eq!(json["bands"][2]["range"], "25 - 29.9");
    }

    #[tokio::test]
    async fn test_dataset_limit() {
        let (status, body) = get(create_test_app(), "/api/v1/dataset?limit=20").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["records"].as_array().unwrap().len(), 20);
        assert_eq!(json["total"], 50);
        assert_eq!(json["records"][0]["Name"], "Person_1");
    }

    #[tokio::test]
    async fn test_dataset_export() {
        let (status, body) = get(create_test_app(), "/api/v1/dataset/export").await;
        assert_eq!(status, StatusCode::OK);

        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("Name,Age,BMI"));
        assert_eq!(text.lines().count(), 51);
    }

    #[tokio::test]
    async fn test_stats() {
        let (status, body) = get(create_test_app(), "/api/v1/dataset/stats/heart_rate").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["metric"], "Heart_Rate");
        assert_eq!(json["count"], 50);
        assert!(json["min"].as_f64().unwrap() >= 60.0);
        assert!(json["max"].as_f64().unwrap() < 100.0);
    }

    #[tokio::test]
    async fn test_unknown_metric() {
        let (status, body) = get(create_test_app(), "/api/v1/dataset/stats/steps").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "UNKNOWN_METRIC");
    }

    #[tokio::test]
    async fn test_distribution() {
        let (status, body) =
            get(create_test_app(), "/api/v1/dataset/distribution/BMI?bins=10").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let bins = json["histogram"].as_array().unwrap();
        assert_eq!(bins.len(), 10);
        let total: u64 = bins.iter().map(|b| b["count"].as_u64().unwrap()).sum();
        assert_eq!(total, 50);

        let (status, _) =
            get(create_test_app(), "/api/v1/dataset/distribution/BMI?bins=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_trend() {
        let (status, body) = get(create_test_app(), "/api/v1/dataset/trend/weight").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["points"].as_array().unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_correlations() {
        let (status, body) = get(create_test_app(), "/api/v1/dataset/correlations").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["columns"].as_array().unwrap().len(), 8);
        assert_eq!(json["matrix"][0][0], 1.0);
    }

    #[tokio::test]
    async fn test_dashboard() {
        let (status, body) = get(create_test_app(), "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["key_metrics"]["total_users"], 1200);
        assert_eq!(json["weekly_trend"].as_array().unwrap().len(), 7);
    }
}
