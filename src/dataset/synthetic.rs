//! Synthetic health dataset
//!
//! A fixed-seed random fill of person records. Generated once and read-only
//! afterwards; the same seed and size always produce the same rows.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::OnceLock;

use super::error::DatasetResult;
use super::types::{HealthMetric, PersonRecord};

/// Default RNG seed
pub const DEFAULT_SEED: u64 = 42;
/// Default number of people
pub const DEFAULT_SIZE: usize = 50;

/// Generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetConfig {
    pub seed: u64,
    pub size: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            size: DEFAULT_SIZE,
        }
    }
}

impl DatasetConfig {
    pub fn new(seed: u64, size: usize) -> Self {
        Self { seed, size }
    }
}

/// The generated table
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    records: Vec<PersonRecord>,
    seed: u64,
    generated_at: DateTime<Utc>,
}

static SHARED: OnceLock<Dataset> = OnceLock::new();

impl Dataset {
    /// Generate a dataset from the given parameters
    pub fn generate(config: DatasetConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let n = config.size;

        // Draw column by column so each column's values depend only on the
        // seed and the columns before it.
        let ages = draw_ints(&mut rng, n, 20, 70);
        let bmis = draw_floats(&mut rng, n, 18.0, 35.0, 2);
        let heart_rates = draw_ints(&mut rng, n, 60, 100);
        let blood_pressures = draw_ints(&mut rng, n, 110, 140);
        let cholesterols = draw_ints(&mut rng, n, 150, 250);
        let blood_sugars = draw_ints(&mut rng, n, 70, 150);
        let weights = draw_floats(&mut rng, n, 50.0, 100.0, 1);
        let heights = draw_floats(&mut rng, n, 1.5, 1.9, 2);

        let records = (0..n)
            .map(|i| PersonRecord {
                name: format!("Person_{}", i + 1),
                age: ages[i],
                bmi: bmis[i],
                heart_rate: heart_rates[i],
                blood_pressure: blood_pressures[i],
                cholesterol: cholesterols[i],
                blood_sugar: blood_sugars[i],
                weight: weights[i],
                height: heights[i],
            })
            .collect();

        tracing::debug!(seed = config.seed, size = n, "Generated synthetic dataset");

        Self {
            records,
            seed: config.seed,
            generated_at: Utc::now(),
        }
    }

    /// Process-wide dataset with default parameters, generated on first use
    pub fn shared() -> &'static Dataset {
        SHARED.get_or_init(|| Dataset::generate(DatasetConfig::default()))
    }

    /// All rows
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Names of the numeric columns in table order
    pub fn numeric_columns(&self) -> Vec<&'static str> {
        HealthMetric::all().iter().map(|m| m.column_name()).collect()
    }

    /// Values of one numeric column, in row order
    pub fn column(&self, metric: HealthMetric) -> Vec<f64> {
        self.records.iter().map(|r| r.value(metric)).collect()
    }

    /// Values of a column looked up by name
    pub fn column_by_name(&self, name: &str) -> DatasetResult<Vec<f64>> {
        let metric: HealthMetric = name.parse()?;
        Ok(self.column(metric))
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> &[PersonRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Rows ordered by age; ties keep table order
    pub fn sorted_by_age(&self) -> Vec<&PersonRecord> {
        let mut rows: Vec<&PersonRecord> = self.records.iter().collect();
        rows.sort_by_key(|r| r.age);
        rows
    }

    /// Render the table as CSV with a header row
    pub fn to_csv(&self) -> DatasetResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in &self.records {
            writer.serialize(record)?;
        }
        let bytes = writer.into_inner()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Integers in [low, high)
fn draw_ints(rng: &mut StdRng, n: usize, low: u32, high: u32) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range(low..high)).collect()
}

/// Uniform floats in [low, high), rounded to `decimals`
fn draw_floats(rng: &mut StdRng, n: usize, low: f64, high: f64, decimals: i32) -> Vec<f64> {
    let scale = 10f64.powi(decimals);
    (0..n)
        .map(|_| (rng.gen_range(low..high) * scale).round() / scale)
        .collect()
}
