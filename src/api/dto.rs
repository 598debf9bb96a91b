//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::bmi::{BmiReport, Category, ScaleBand, Severity};
use crate::dataset::PersonRecord;
use crate::stats::{BoxPlot, CorrelationPair, HistogramBin, Summary, TrendPoint};

// ============================================
// BMI DTOs
// ============================================

/// BMI evaluation request
#[derive(Debug, Deserialize)]
pub struct BmiRequest {
    /// Height in meters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
}

/// BMI evaluation response
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: Category,
    /// Display name, e.g. "Normal weight"
    pub category_label: &'static str,
    pub severity: Severity,
    pub color: &'static str,
    pub suggestion: &'static str,
    /// Marker position on the 0-4 reference scale
    pub scale_position: f64,
}

impl From<BmiReport> for BmiResponse {
    fn from(report: BmiReport) -> Self {
        Self {
            bmi: report.bmi,
            category: report.category,
            category_label: report.category.label(),
            severity: report.category.severity(),
            color: report.category.color(),
            suggestion: report.suggestion,
            scale_position: report.scale_position,
        }
    }
}

/// Reference scale response
#[derive(Debug, Serialize)]
pub struct ScaleResponse {
    pub bands: Vec<ScaleBand>,
    /// Axis limits
    pub min: f64,
    pub max: f64,
}

// ============================================
// DATASET DTOs
// ============================================

/// Dataset listing parameters
#[derive(Debug, Deserialize)]
pub struct DatasetParams {
    /// Return only the first N rows
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Dataset listing response
#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    pub records: Vec<PersonRecord>,
    /// Rows in the full dataset
    pub total: usize,
    pub seed: u64,
    /// ISO 8601 generation time
    pub generated_at: String,
}

/// Numeric column listing
#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    pub columns: Vec<&'static str>,
}

/// Column summary response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub metric: String,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Distribution query parameters
#[derive(Debug, Deserialize)]
pub struct DistributionParams {
    /// Number of histogram bins (default: 20, max: 100)
    #[serde(default)]
    pub bins: Option<usize>,
}

/// Histogram + box plot response
#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub metric: String,
    pub histogram: Vec<HistogramBin>,
    pub box_plot: BoxPlot,
}

/// Metric-vs-age response
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub metric: String,
    pub points: Vec<TrendPoint>,
}

/// Correlation matrix response
#[derive(Debug, Serialize)]
pub struct CorrelationsResponse {
    pub columns: Vec<&'static str>,
    /// Row-major coefficients; null where undefined
    pub matrix: Vec<Vec<Option<f64>>>,
    /// Off-diagonal pairs, strongest first
    pub pairs: Vec<CorrelationPair>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Rows in the dataset
    pub dataset_rows: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
