//! Descriptive Statistics
//!
//! Summary, distribution and correlation figures over dataset columns.
//! Everything here is plain arithmetic over `&[f64]`; callers pick the column.

use serde::Serialize;

use crate::dataset::{Dataset, HealthMetric};

/// Mean/median/min/max of a column
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// One histogram bin, closed on the left
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Five-number summary plus outliers
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BoxPlot {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

/// Pairwise Pearson coefficients over the numeric columns
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<&'static str>,
    /// Row-major; `None` where a coefficient is undefined
    pub values: Vec<Vec<Option<f64>>>,
}

/// A single off-diagonal entry of the matrix
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CorrelationPair {
    pub metric_a: &'static str,
    pub metric_b: &'static str,
    pub coefficient: f64,
    /// "strong", "moderate", "weak" or "negligible"
    pub strength: &'static str,
    /// "positive" or "negative"
    pub direction: &'static str,
}

/// Point of a metric-vs-age trend
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub age: u32,
    pub value: f64,
}

/// Summary statistics, `None` for an empty slice
pub fn summary(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let sorted = sorted_copy(values);
    let count = values.len();

    Some(Summary {
        count,
        mean: values.iter().sum::<f64>() / count as f64,
        median: quantile(&sorted, 0.5),
        min: sorted[0],
        max: sorted[count - 1],
    })
}

/// Equal-width histogram over [min, max]; the last bin includes max
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for v in values {
        let idx = if width == 0.0 {
            0
        } else {
            (((v - min) / width) as usize).min(bins - 1)
        };
        out[idx].count += 1;
    }

    out
}

/// Box-plot figures with 1.5·IQR whiskers, `None` for an empty slice
pub fn box_plot(values: &[f64]) -> Option<BoxPlot> {
    if values.is_empty() {
        return None;
    }

    let sorted = sorted_copy(values);
    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    // Whiskers stop at the most extreme observations inside the fences
    let lower_whisker = sorted
        .iter()
        .cloned()
        .find(|v| *v >= low_fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .cloned()
        .find(|v| *v <= high_fence)
        .unwrap_or(q3);

    let outliers = sorted
        .iter()
        .cloned()
        .filter(|v| *v < low_fence || *v > high_fence)
        .collect();

    Some(BoxPlot {
        q1,
        median,
        q3,
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

/// Pearson correlation coefficient
///
/// `None` when the slices differ in length, have fewer than two points, or
/// either one has zero variance. Deviations are taken from the mean so a
/// constant series stays constant under rounding.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if negligible_spread(sxx, x) || negligible_spread(syy, y) {
        return None;
    }

    let r = sxy / (sxx * syy).sqrt();
    if r.is_nan() {
        None
    } else {
        Some(r.clamp(-1.0, 1.0))
    }
}

/// Sum of squared deviations indistinguishable from rounding noise in the mean
fn negligible_spread(sum_sq_dev: f64, values: &[f64]) -> bool {
    let n = values.len() as f64;
    let sum_sq: f64 = values.iter().map(|v| v * v).sum();
    let tolerance = (2.0 * n * f64::EPSILON).powi(2) * sum_sq;

    sum_sq_dev <= tolerance
}

/// Correlation matrix over every numeric column of the dataset
pub fn correlation_matrix(dataset: &Dataset) -> CorrelationMatrix {
    let metrics = HealthMetric::all();
    let columns: Vec<Vec<f64>> = metrics.iter().map(|m| dataset.column(*m)).collect();

    let values = (0..metrics.len())
        .map(|i| {
            (0..metrics.len())
                .map(|j| {
                    if i == j {
                        Some(1.0)
                    } else {
                        pearson(&columns[i], &columns[j])
                    }
                })
                .collect()
        })
        .collect();

    CorrelationMatrix {
        columns: metrics.iter().map(|m| m.column_name()).collect(),
        values,
    }
}

impl CorrelationMatrix {
    /// Off-diagonal pairs sorted by absolute coefficient, strongest first
    pub fn ranked_pairs(&self) -> Vec<CorrelationPair> {
        let mut pairs = Vec::new();

        for i in 0..self.columns.len() {
            for j in (i + 1)..self.columns.len() {
                if let Some(r) = self.values[i][j] {
                    pairs.push(CorrelationPair {
                        metric_a: self.columns[i],
                        metric_b: self.columns[j],
                        coefficient: r,
                        strength: correlation_strength(r),
                        direction: if r >= 0.0 { "positive" } else { "negative" },
                    });
                }
            }
        }

        pairs.sort_by(|a, b| b.coefficient.abs().total_cmp(&a.coefficient.abs()));
        pairs
    }
}

/// Human-readable strength of a coefficient
pub fn correlation_strength(r: f64) -> &'static str {
    let abs_r = r.abs();
    if abs_r > 0.7 {
        "strong"
    } else if abs_r > 0.5 {
        "moderate"
    } else if abs_r > 0.3 {
        "weak"
    } else {
        "negligible"
    }
}

/// Metric values paired with age, ordered by age
pub fn trend_by_age(dataset: &Dataset, metric: HealthMetric) -> Vec<TrendPoint> {
    dataset
        .sorted_by_age()
        .into_iter()
        .map(|r| TrendPoint {
            age: r.age,
            value: r.value(metric),
        })
        .collect()
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Linear-interpolated quantile of a sorted, non-empty slice
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetConfig;

    #[test]
    fn test_summary() {
        let s = summary(&[3.0, 1.0, 4.0, 1.0, 5.0]).unwrap();
        assert_eq!(s.count, 5);
        assert!((s.mean - 2.8).abs() < 1e-9);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 5.0);

        let even = summary(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(even.median, 2.5);

        assert!(summary(&[]).is_none());
    }

    #[test]
    fn test_histogram_counts() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = histogram(&values, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert_eq!(bins[19].end, 99.0);
        assert_eq!(bins[0].start, 0.0);
    }

    #[test]
    fn test_histogram_edge_cases() {
        assert!(histogram(&[], 10).is_empty());
        assert!(histogram(&[1.0, 2.0], 0).is_empty());

        let constant = histogram(&[5.0, 5.0, 5.0], 4);
        assert_eq!(constant[0].count, 3);
        assert_eq!(constant.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn test_box_plot() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0];
        let bp = box_plot(&values).unwrap();
        assert_eq!(bp.median, 5.0);
        assert_eq!(bp.q1, 3.0);
        assert_eq!(bp.q3, 7.0);
        assert_eq!(bp.outliers, vec![100.0]);
        assert_eq!(bp.upper_whisker, 8.0);
        assert_eq!(bp.lower_whisker, 1.0);

        assert!(box_plot(&[]).is_none());
    }

    #[test]
    fn test_pearson_perfect() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((pearson(&x, &y).unwrap() - 1.0).abs() < 0.001);

        let z = vec![10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &z).unwrap() + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pearson_undefined() {
        assert!(pearson(&[], &[]).is_none());
        assert!(pearson(&[1.0, 2.0], &[1.0]).is_none());
        assert!(pearson(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).is_none());
    }

    #[test]
    fn test_pearson_constant_inexact_values() {
        let steps = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert!(pearson(&[0.1; 7], &steps).is_none());
        assert!(pearson(&steps, &[1.7; 7]).is_none());
        assert!(pearson(&[1.65; 3], &[0.0, 1.0, 2.0]).is_none());
        assert!(pearson(&[72.3; 3], &[0.0, 1.0, 2.0]).is_none());

        let ramp: Vec<f64> = (0..50).map(f64::from).collect();
        assert!(pearson(&[0.1; 50], &ramp).is_none());
    }

    #[test]
    fn test_pearson_small_spread_is_defined() {
        let x = [72.30, 72.31, 72.32, 72.33];
        let y = [1.0, 2.0, 3.0, 4.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_correlation_matrix() {
        let ds = Dataset::generate(DatasetConfig::default());
        let matrix = correlation_matrix(&ds);
        assert_eq!(matrix.columns.len(), 8);

        for i in 0..8 {
            assert_eq!(matrix.values[i][i], Some(1.0));
            for j in 0..8 {
                assert_eq!(matrix.values[i][j], matrix.values[j][i]);
                if let Some(r) = matrix.values[i][j] {
                    assert!((-1.0..=1.0).contains(&r));
                }
            }
        }

        let pairs = matrix.ranked_pairs();
        assert_eq!(pairs.len(), 28);
        assert!(pairs
            .windows(2)
            .all(|w| w[0].coefficient.abs() >= w[1].coefficient.abs()));
    }

    #[test]
    fn test_correlation_strength() {
        assert_eq!(correlation_strength(0.8), "strong");
        assert_eq!(correlation_strength(-0.75), "strong");
        assert_eq!(correlation_strength(0.6), "moderate");
        assert_eq!(correlation_strength(-0.4), "weak");
        assert_eq!(correlation_strength(0.1), "negligible");
    }

    #[test]
    fn test_trend_by_age() {
        let ds = Dataset::generate(DatasetConfig::default());
        let trend = trend_by_age(&ds, HealthMetric::Cholesterol);
        assert_eq!(trend.len(), ds.len());
        assert!(trend.windows(2).all(|w| w[0].age <= w[1].age));
    }
}
