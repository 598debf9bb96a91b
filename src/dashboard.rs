//! Dashboard sample series
//!
//! Static figures shown on the home page. These are fixed sample values, not
//! derived from the synthetic dataset.

use serde::Serialize;

use crate::bmi::Category;

/// Headline counters
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KeyMetrics {
    pub total_users: u32,
    pub bmi_calculations: u32,
    pub reports_checked: u32,
}

/// Label/count slice of a pie chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Slice {
    pub label: String,
    pub count: u32,
}

/// One day of the weekly trend
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendDay {
    pub day: u32,
    pub weight_kg: f64,
    pub steps: u32,
}

/// Named bar with its display color
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Everything the home page plots
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSamples {
    pub key_metrics: KeyMetrics,
    pub bmi_distribution: Vec<Slice>,
    pub heart_disease: Vec<Slice>,
    pub weekly_trend: Vec<TrendDay>,
    pub average_metrics: Vec<Bar>,
}

const BMI_DISTRIBUTION: [u32; 4] = [50, 400, 300, 125];
const WEEKLY_WEIGHT: [f64; 7] = [65.0, 64.8, 64.5, 64.3, 64.0, 63.8, 63.7];
const WEEKLY_STEPS: [u32; 7] = [7000, 7500, 8000, 6500, 9000, 8500, 8000];

/// Build the home page samples
pub fn samples() -> DashboardSamples {
    DashboardSamples {
        key_metrics: KeyMetrics {
            total_users: 1200,
            bmi_calculations: 875,
            reports_checked: 450,
        },
        bmi_distribution: Category::all()
            .iter()
            .zip(BMI_DISTRIBUTION)
            .map(|(category, count)| Slice {
                label: category.name().to_string(),
                count,
            })
            .collect(),
        heart_disease: vec![
            Slice {
                label: "Yes".to_string(),
                count: 120,
            },
            Slice {
                label: "No".to_string(),
                count: 1080,
            },
        ],
        weekly_trend: WEEKLY_WEIGHT
            .iter()
            .zip(WEEKLY_STEPS)
            .enumerate()
            .map(|(i, (weight_kg, steps))| TrendDay {
                day: i as u32 + 1,
                weight_kg: *weight_kg,
                steps,
            })
            .collect(),
        average_metrics: vec![
            Bar {
                label: "BMI",
                value: 22.5,
                color: "#ff4081",
            },
            Bar {
                label: "Heart Rate",
                value: 72.0,
                color: "#0288d1",
            },
            Bar {
                label: "Blood Pressure",
                value: 120.0,
                color: "#ff80ab",
            },
            Bar {
                label: "Cholesterol",
                value: 180.0,
                color: "#81d4fa",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples() {
        let s = samples();
        assert_eq!(s.key_metrics.total_users, 1200);
        assert_eq!(s.bmi_distribution.len(), 4);
        assert_eq!(s.bmi_distribution[1].label, "Normal");
        assert_eq!(s.bmi_distribution[1].count, 400);
        assert_eq!(
            s.heart_disease.iter().map(|s| s.count).sum::<u32>(),
            s.key_metrics.total_users
        );
        assert_eq!(s.weekly_trend.len(), 7);
        assert_eq!(s.weekly_trend[0].day, 1);
        assert_eq!(s.weekly_trend[6].steps, 8000);
        assert_eq!(s.average_metrics[3].value, 180.0);
    }
}
