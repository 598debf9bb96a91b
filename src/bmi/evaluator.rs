//! BMI Evaluator
//!
//! Computes BMI, picks the category and places a marker on the 0-4
//! reference scale. Pure arithmetic; no validation, no state.

use super::types::{
    BmiReport, Category, Measurement, ScaleBand, NORMAL_BELOW, OVERWEIGHT_BELOW,
    UNDERWEIGHT_BELOW,
};

/// Left edge used for the Overweight marker.
///
/// Classification switches at 24.9, the marker band starts at 25. Values in
/// [24.9, 25) therefore plot slightly left of the Overweight band.
const OVERWEIGHT_SCALE_START: f64 = 25.0;

/// Evaluate a height (m) and weight (kg)
///
/// Total over its numeric domain: out-of-range inputs are computed as-is.
pub fn classify(height: f64, weight: f64) -> BmiReport {
    let bmi = weight / (height * height);
    let category = Category::from_bmi(bmi);

    BmiReport {
        bmi,
        category,
        suggestion: category.suggestion(),
        scale_position: scale_position(bmi, category),
    }
}

/// Evaluate a measurement
pub fn evaluate(measurement: &Measurement) -> BmiReport {
    classify(measurement.height, measurement.weight)
}

/// Marker position on the 0-4 axis for a BMI already classified as `category`
pub fn scale_position(bmi: f64, category: Category) -> f64 {
    match category {
        Category::Underweight => 0.5,
        Category::Normal => 1.0 + (bmi - UNDERWEIGHT_BELOW) / (NORMAL_BELOW - UNDERWEIGHT_BELOW),
        Category::Overweight => {
            2.0 + (bmi - OVERWEIGHT_SCALE_START) / (OVERWEIGHT_BELOW - OVERWEIGHT_SCALE_START)
        }
        Category::Obese => 3.5,
    }
}

/// The four unit-width bands of the reference scale, in order
pub fn scale_reference() -> Vec<ScaleBand> {
    Category::all()
        .iter()
        .map(|category| {
            let start = category.index() as f64;
            ScaleBand {
                category: *category,
                label: category.name(),
                range: category.range_label(),
                color: category.color(),
                start,
                end: start + 1.0,
            }
        })
        .collect()
}
