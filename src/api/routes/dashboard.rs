//! Dashboard Routes
//!
//! - GET /api/v1/dashboard - Home page sample series

use axum::Json;

use crate::dashboard::{samples, DashboardSamples};

/// GET /api/v1/dashboard
pub async fn get_dashboard() -> Json<DashboardSamples> {
    Json(samples())
}
