//! # HealthBot
//!
//! Backend for a personal health dashboard: BMI evaluation plus the data
//! behind the dashboard charts.
//!
//! ## Modules
//!
//! - [`bmi`]: BMI computation, categorization and reference-scale placement
//! - [`dataset`]: Fixed-seed synthetic health records
//! - [`stats`]: Summary, distribution and correlation figures
//! - [`dashboard`]: Static home page sample series
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use healthbot::bmi::{classify, Category};
//!
//! let report = classify(1.80, 55.0);
//! assert_eq!(report.category, Category::Underweight);
//! assert_eq!(report.scale_position, 0.5);
//! println!("BMI {:.2}: {}", report.bmi, report.suggestion);
//! ```

pub mod api;
pub mod bmi;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod stats;

// Re-export top-level types for convenience
pub use bmi::{
    classify, evaluate, scale_reference, BmiError, BmiReport, BmiResult, Category, Measurement,
    ScaleBand, Severity,
};

pub use dataset::{Dataset, DatasetConfig, DatasetError, DatasetResult, HealthMetric, PersonRecord};

pub use stats::{BoxPlot, CorrelationMatrix, CorrelationPair, HistogramBin, Summary, TrendPoint};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{generate_default_config, ApiConfig, Config, ConfigError, LoggingConfig};
