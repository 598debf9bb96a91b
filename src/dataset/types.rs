//! Dataset record and column types

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::DatasetError;

/// One synthetic person
///
/// Field names serialize to the column headers of the dashboard table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Heart_Rate")]
    pub heart_rate: u32,
    #[serde(rename = "Blood_Pressure")]
    pub blood_pressure: u32,
    #[serde(rename = "Cholesterol")]
    pub cholesterol: u32,
    #[serde(rename = "Blood_Sugar")]
    pub blood_sugar: u32,
    #[serde(rename = "Weight")]
    pub weight: f64,
    #[serde(rename = "Height")]
    pub height: f64,
}

impl PersonRecord {
    /// Read a numeric column as f64
    pub fn value(&self, metric: HealthMetric) -> f64 {
        match metric {
            HealthMetric::Age => self.age as f64,
            HealthMetric::Bmi => self.bmi,
            HealthMetric::HeartRate => self.heart_rate as f64,
            HealthMetric::BloodPressure => self.blood_pressure as f64,
            HealthMetric::Cholesterol => self.cholesterol as f64,
            HealthMetric::BloodSugar => self.blood_sugar as f64,
            HealthMetric::Weight => self.weight,
            HealthMetric::Height => self.height,
        }
    }
}

/// Numeric column of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthMetric {
    #[serde(rename = "Age")]
    Age,
    #[serde(rename = "BMI")]
    Bmi,
    #[serde(rename = "Heart_Rate")]
    HeartRate,
    #[serde(rename = "Blood_Pressure")]
    BloodPressure,
    #[serde(rename = "Cholesterol")]
    Cholesterol,
    #[serde(rename = "Blood_Sugar")]
    BloodSugar,
    #[serde(rename = "Weight")]
    Weight,
    #[serde(rename = "Height")]
    Height,
}

impl HealthMetric {
    /// All numeric columns in table order
    pub fn all() -> &'static [HealthMetric] {
        &[
            HealthMetric::Age,
            HealthMetric::Bmi,
            HealthMetric::HeartRate,
            HealthMetric::BloodPressure,
            HealthMetric::Cholesterol,
            HealthMetric::BloodSugar,
            HealthMetric::Weight,
            HealthMetric::Height,
        ]
    }

    /// Column header
    pub fn column_name(&self) -> &'static str {
        match self {
            HealthMetric::Age => "Age",
            HealthMetric::Bmi => "BMI",
            HealthMetric::HeartRate => "Heart_Rate",
            HealthMetric::BloodPressure => "Blood_Pressure",
            HealthMetric::Cholesterol => "Cholesterol",
            HealthMetric::BloodSugar => "Blood_Sugar",
            HealthMetric::Weight => "Weight",
            HealthMetric::Height => "Height",
        }
    }
}

impl std::fmt::Display for HealthMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for HealthMetric {
    type Err = DatasetError;

    /// Accepts any case with `_`, `-` or space between words
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "age" => Ok(HealthMetric::Age),
            "bmi" => Ok(HealthMetric::Bmi),
            "heartrate" => Ok(HealthMetric::HeartRate),
            "bloodpressure" => Ok(HealthMetric::BloodPressure),
            "cholesterol" => Ok(HealthMetric::Cholesterol),
            "bloodsugar" => Ok(HealthMetric::BloodSugar),
            "weight" => Ok(HealthMetric::Weight),
            "height" => Ok(HealthMetric::Height),
            _ => Err(DatasetError::UnknownMetric(s.to_string())),
        }
    }
}
