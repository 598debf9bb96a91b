//! Core data types for BMI evaluation
//!
//! - `Measurement`: A height/weight pair entered by the user
//! - `Category`: Ordered weight-status classification
//! - `Severity`: Message style hint attached to a category
//! - `BmiReport`: Result of one evaluation

use serde::{Deserialize, Serialize};

use super::error::{BmiError, BmiResult};

/// Minimum accepted height in meters
pub const MIN_HEIGHT_M: f64 = 1.0;
/// Maximum accepted height in meters
pub const MAX_HEIGHT_M: f64 = 2.5;
/// Minimum accepted weight in kilograms
pub const MIN_WEIGHT_KG: f64 = 30.0;
/// Maximum accepted weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 200.0;

/// Upper bound (exclusive) of the Underweight band
pub const UNDERWEIGHT_BELOW: f64 = 18.5;
/// Upper bound (exclusive) of the Normal band
pub const NORMAL_BELOW: f64 = 24.9;
/// Upper bound (exclusive) of the Overweight band
pub const OVERWEIGHT_BELOW: f64 = 29.9;

/// A single height/weight measurement
///
/// Immutable once created. Nothing is persisted; a measurement lives for
/// exactly one evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Height in meters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
}

impl Measurement {
    /// Create a measurement without range checks
    pub fn new(height: f64, weight: f64) -> Self {
        Self { height, weight }
    }

    /// Create a measurement, rejecting values outside the accepted input bounds
    pub fn validated(height: f64, weight: f64) -> BmiResult<Self> {
        check_range("height", height, MIN_HEIGHT_M, MAX_HEIGHT_M)?;
        check_range("weight", weight, MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;
        Ok(Self { height, weight })
    }

    /// Body Mass Index for this measurement
    pub fn bmi(&self) -> f64 {
        self.weight / (self.height * self.height)
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> BmiResult<()> {
    // NaN fails both comparisons, so test for containment instead of exclusion
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(BmiError::InvalidInput {
            field,
            value,
            min,
            max,
        })
    }
}

/// Weight-status category derived from BMI
///
/// Variants are declared in scale order, so `Ord` follows the BMI axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 24.9)
    Normal,
    /// BMI in [24.9, 29.9)
    Overweight,
    /// BMI of 29.9 and above
    Obese,
}

impl Category {
    /// Get all categories in scale order
    pub fn all() -> &'static [Category] {
        &[
            Category::Underweight,
            Category::Normal,
            Category::Overweight,
            Category::Obese,
        ]
    }

    /// Classify a BMI value. Comparisons are strict, so 24.9 and 29.9
    /// land in the lower bracket.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Category::Underweight
        } else if bmi < NORMAL_BELOW {
            Category::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// Position of this category's band on the 0-4 reference scale
    pub fn index(&self) -> usize {
        match self {
            Category::Underweight => 0,
            Category::Normal => 1,
            Category::Overweight => 2,
            Category::Obese => 3,
        }
    }

    /// Classification range as (inclusive lower, exclusive upper)
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Category::Underweight => (0.0, UNDERWEIGHT_BELOW),
            Category::Normal => (UNDERWEIGHT_BELOW, NORMAL_BELOW),
            Category::Overweight => (NORMAL_BELOW, OVERWEIGHT_BELOW),
            Category::Obese => (OVERWEIGHT_BELOW, f64::INFINITY),
        }
    }

    /// Name used on the reference scale
    pub fn name(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Name shown next to an evaluation result
    pub fn label(&self) -> &'static str {
        match self {
            Category::Normal => "Normal weight",
            other => other.name(),
        }
    }

    /// Range text printed on the reference scale.
    ///
    /// These are the display strings of the reference chart and differ from
    /// the thresholds used by `from_bmi`.
    pub fn range_label(&self) -> &'static str {
        match self {
            Category::Underweight => "< 18.5",
            Category::Normal => "18.5 - 24.9",
            Category::Overweight => "25 - 29.9",
            Category::Obese => "≥ 30",
        }
    }

    /// Display color of the category band
    pub fn color(&self) -> &'static str {
        match self {
            Category::Underweight => "#FFD700",
            Category::Normal => "#4CAF50",
            Category::Overweight => "#FFA500",
            Category::Obese => "#F44336",
        }
    }

    /// Message style for a result in this category
    pub fn severity(&self) -> Severity {
        match self {
            Category::Normal => Severity::Success,
            Category::Underweight | Category::Overweight => Severity::Warning,
            Category::Obese => Severity::Error,
        }
    }

    /// Fixed wellness suggestion for this category
    pub fn suggestion(&self) -> &'static str {
        match self {
            Category::Underweight => {
                "Consider consulting a nutritionist to develop a healthy weight gain plan."
            }
            Category::Normal => {
                "Great! Maintain your current lifestyle with balanced diet and regular exercise."
            }
            Category::Overweight => {
                "Consider increasing physical activity and consulting a nutritionist for dietary advice."
            }
            Category::Obese => {
                "It's recommended to consult with a healthcare provider for a comprehensive health plan."
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Underweight => write!(f, "underweight"),
            Category::Normal => write!(f, "normal"),
            Category::Overweight => write!(f, "overweight"),
            Category::Obese => write!(f, "obese"),
        }
    }
}

/// How a result should be presented
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Outcome of evaluating one measurement
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BmiReport {
    /// weight / height²
    pub bmi: f64,
    /// Category selected by threshold comparison
    pub category: Category,
    /// Fixed suggestion text for the category
    pub suggestion: &'static str,
    /// Marker position on the 0-4 reference scale
    pub scale_position: f64,
}

/// One band of the reference scale
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScaleBand {
    pub category: Category,
    pub label: &'static str,
    pub range: &'static str,
    pub color: &'static str,
    /// Left edge on the 0-4 axis
    pub start: f64,
    /// Right edge on the 0-4 axis
    pub end: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ordering() {
        assert!(Category::Underweight < Category::Normal);
        assert!(Category::Normal < Category::Overweight);
        assert!(Category::Overweight < Category::Obese);

        for (i, category) in Category::all().iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_from_bmi_boundaries() {
        assert_eq!(Category::from_bmi(18.49), Category::Underweight);
        assert_eq!(Category::from_bmi(18.5), Category::Normal);
        assert_eq!(Category::from_bmi(24.9), Category::Normal);
        assert_eq!(Category::from_bmi(24.91), Category::Overweight);
        assert_eq!(Category::from_bmi(29.9), Category::Overweight);
        assert_eq!(Category::from_bmi(29.91), Category::Obese);
    }

    #[test]
    fn test_bounds_partition_the_axis() {
        let all = Category::all();
        assert_eq!(all[0].bounds().0, 0.0);
        for pair in all.windows(2) {
            assert_eq!(pair[0].bounds().1, pair[1].bounds().0);
        }
        assert!(all[3].bounds().1.is_infinite());
    }

    #[test]
    fn test_labels_and_severity() {
        assert_eq!(Category::Normal.label(), "Normal weight");
        assert_eq!(Category::Obese.label(), "Obese");
        assert_eq!(Category::Normal.severity(), Severity::Success);
        assert_eq!(Category::Overweight.severity(), Severity::Warning);
        assert_eq!(Category::Obese.severity(), Severity::Error);
        assert_eq!(Category::Overweight.to_string(), "overweight");
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&Category::Overweight).unwrap();
        assert_eq!(json, "\"overweight\"");

        let parsed: Category = serde_json::from_str("\"obese\"").unwrap();
        assert_eq!(parsed, Category::Obese);
    }

    #[test]
    fn test_validated_measurement() {
        assert!(Measurement::validated(1.65, 65.0).is_ok());
        assert!(Measurement::validated(1.0, 30.0).is_ok());
        assert!(Measurement::validated(2.5, 200.0).is_ok());

        let err = Measurement::validated(0.9, 65.0).unwrap_err();
        assert!(matches!(err, BmiError::InvalidInput { field: "height", .. }));

        let err = Measurement::validated(1.65, 250.0).unwrap_err();
        assert!(matches!(err, BmiError::InvalidInput { field: "weight", .. }));

        assert!(Measurement::validated(f64::NAN, 65.0).is_err());
        assert!(Measurement::validated(1.65, f64::INFINITY).is_err());
    }

    #[test]
    fn test_unchecked_measurement_still_computes() {
        let m = Measurement::new(3.0, 9.0);
        assert!((m.bmi() - 1.0).abs() < 1e-12);
    }
}
