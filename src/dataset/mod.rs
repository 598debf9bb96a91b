//! HealthBot Synthetic Dataset
//!
//! Fixed-seed person records backing the visualization endpoints.
//!
//! ```rust
//! use healthbot::dataset::{Dataset, HealthMetric};
//!
//! let dataset = Dataset::shared();
//! let bmi = dataset.column(HealthMetric::Bmi);
//! assert_eq!(bmi.len(), dataset.len());
//! ```

pub mod error;
pub mod synthetic;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use synthetic::{Dataset, DatasetConfig, DEFAULT_SEED, DEFAULT_SIZE};
pub use types::{HealthMetric, PersonRecord};
