//! Dataset Routes
//!
//! Read-only views of the synthetic dataset behind the visualization page.
//!
//! - GET /api/v1/dataset - Records (optionally the first N)
//! - GET /api/v1/dataset/columns - Numeric column names
//! - GET /api/v1/dataset/export - CSV download
//! - GET /api/v1/dataset/stats/:metric - Mean/median/min/max
//! - GET /api/v1/dataset/distribution/:metric - Histogram and box plot
//! - GET /api/v1/dataset/trend/:metric - Metric against age
//! - GET /api/v1/dataset/correlations - Correlation matrix

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    ColumnsResponse, CorrelationsResponse, DatasetParams, DatasetResponse, DistributionParams,
    DistributionResponse, StatsResponse, TrendResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::HealthMetric;
use crate::stats;

const DEFAULT_BINS: usize = 20;
const MAX_BINS: usize = 100;

/// GET /api/v1/dataset
pub async fn list_records(
    State(state): State<Arc<AppState>>,
    params: Result<Query<DatasetParams>, QueryRejection>,
) -> ApiResult<Json<DatasetResponse>> {
    let Query(params) = params?;
    let dataset = &state.dataset;
    let records = match params.limit {
        Some(n) => dataset.head(n),
        None => dataset.records(),
    };

    Ok(Json(DatasetResponse {
        records: records.to_vec(),
        total: dataset.len(),
        seed: dataset.seed(),
        generated_at: dataset.generated_at().to_rfc3339(),
    }))
}

/// GET /api/v1/dataset/columns
pub async fn list_columns(State(state): State<Arc<AppState>>) -> Json<ColumnsResponse> {
    Json(ColumnsResponse {
        columns: state.dataset.numeric_columns(),
    })
}

/// GET /api/v1/dataset/export
pub async fn export_csv(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let body = state.dataset.to_csv()?;

    tracing::info!(rows = state.dataset.len(), "Exported dataset");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"healthbot_dataset.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// GET /api/v1/dataset/stats/:metric
pub async fn column_stats(
    State(state): State<Arc<AppState>>,
    Path(metric): Path<String>,
) -> ApiResult<Json<StatsResponse>> {
    let metric: HealthMetric = metric.parse()?;
    let values = state.dataset.column(metric);

    let summary = stats::summary(&values)
        .ok_or_else(|| ApiError::NotFound("Dataset has no rows".to_string()))?;

    Ok(Json(StatsResponse {
        metric: metric.to_string(),
        summary,
    }))
}

/// GET /api/v1/dataset/distribution/:metric
pub async fn column_distribution(
    State(state): State<Arc<AppState>>,
    Path(metric): Path<String>,
    params: Result<Query<DistributionParams>, QueryRejection>,
) -> ApiResult<Json<DistributionResponse>> {
    let metric: HealthMetric = metric.parse()?;
    let Query(params) = params?;

    let bins = params.bins.unwrap_or(DEFAULT_BINS);
    if bins == 0 || bins > MAX_BINS {
        return Err(ApiError::Validation(format!(
            "bins must be between 1 and {}",
            MAX_BINS
        )));
    }

    let values = state.dataset.column(metric);
    let box_plot = stats::box_plot(&values)
        .ok_or_else(|| ApiError::NotFound("Dataset has no rows".to_string()))?;

    Ok(Json(DistributionResponse {
        metric: metric.to_string(),
        histogram: stats::histogram(&values, bins),
        box_plot,
    }))
}

/// GET /api/v1/dataset/trend/:metric
pub async fn column_trend(
    State(state): State<Arc<AppState>>,
    Path(metric): Path<String>,
) -> ApiResult<Json<TrendResponse>> {
    let metric: HealthMetric = metric.parse()?;

    Ok(Json(TrendResponse {
        metric: metric.to_string(),
        points: stats::trend_by_age(&state.dataset, metric),
    }))
}

/// GET /api/v1/dataset/correlations
pub async fn correlations(State(state): State<Arc<AppState>>) -> Json<CorrelationsResponse> {
    let matrix = stats::correlation_matrix(&state.dataset);
    let pairs = matrix.ranked_pairs();

    Json(CorrelationsResponse {
        columns: matrix.columns,
        matrix: matrix.values,
        pairs,
    })
}
