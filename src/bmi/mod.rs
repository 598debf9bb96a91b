//! HealthBot BMI Evaluator
//!
//! - **types**: Measurement, Category and the evaluation report
//! - **evaluator**: `classify`, scale position and reference bands
//! - **error**: Input validation errors
//!
//! # Example
//!
//! ```rust
//! use healthbot::bmi::{classify, Category};
//!
//! let report = classify(1.65, 65.0);
//! assert_eq!(report.category, Category::Normal);
//! assert!(report.scale_position >= 1.0 && report.scale_position < 2.0);
//! ```

pub mod error;
pub mod evaluator;
pub mod types;

pub use error::{BmiError, BmiResult};
pub use evaluator::{classify, evaluate, scale_position, scale_reference};
pub use types::{
    BmiReport, Category, Measurement, ScaleBand, Severity, MAX_HEIGHT_M, MAX_WEIGHT_KG,
    MIN_HEIGHT_M, MIN_WEIGHT_KG,
};
