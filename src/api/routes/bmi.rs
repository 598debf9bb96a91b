//! BMI Routes
//!
//! - POST /api/v1/bmi - Evaluate a height/weight measurement
//! - GET /api/v1/bmi/scale - Reference scale bands

use axum::{extract::rejection::JsonRejection, Json};

use crate::api::dto::{BmiRequest, BmiResponse, ScaleResponse};
use crate::api::error::ApiResult;
use crate::bmi::{evaluate, scale_reference, Measurement};

/// POST /api/v1/bmi
///
/// Rejects malformed bodies and measurements outside 1.0-2.5 m / 30-200 kg
/// with 400.
pub async fn evaluate_bmi(
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> ApiResult<Json<BmiResponse>> {
    let Json(req) = payload?;
    let measurement = Measurement::validated(req.height, req.weight)?;
    let report = evaluate(&measurement);

    tracing::info!(
        bmi = report.bmi,
        category = %report.category,
        scale_position = report.scale_position,
        "Evaluated BMI"
    );

    Ok(Json(report.into()))
}

/// GET /api/v1/bmi/scale
pub async fn get_scale() -> Json<ScaleResponse> {
    let bands = scale_reference();
    let min = bands.first().map(|b| b.start).unwrap_or(0.0);
    let max = bands.last().map(|b| b.end).unwrap_or(0.0);

    Json(ScaleResponse { bands, min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::bmi::Category;

    #[tokio::test]
    async fn test_evaluate_bmi() {
        let Json(resp) = evaluate_bmi(Ok(Json(BmiRequest {
            height: 1.70,
            weight: 90.0,
        })))
        .await
        .unwrap();

        assert_eq!(resp.category, Category::Obese);
        assert_eq!(resp.scale_position, 3.5);
        assert_eq!(resp.color, "#F44336");
    }

    #[tokio::test]
    async fn test_evaluate_bmi_out_of_range() {
        let result = evaluate_bmi(Ok(Json(BmiRequest {
            height: 1.70,
            weight: 10.0,
        })))
        .await;

        assert!(matches!(result, Err(ApiError::Measurement(_))));
    }

    #[tokio::test]
    async fn test_scale() {
        let Json(scale) = get_scale().await;
        assert_eq!(scale.bands.len(), 4);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 4.0);
    }
}
