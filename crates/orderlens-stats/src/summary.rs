//! Summary statistics for numeric columns
//!
//! Provides the moment helpers shared by every summarizer:
//! - Rounding to 2 decimals
//! - Mean and sample standard deviation
//! - The key statistics of a column (count, mean, median, std, min, max)

use orderlens_table::Dataset;
use serde::{Deserialize, Serialize};

use crate::error::StatsResult;

/// Round to 2 decimal places, halves away from zero
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Arithmetic mean; `None` for no values
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (N-1 denominator); `None` for fewer than two values
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance =
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Key statistics for a numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Number of non-missing values
    pub count: usize,
    /// Number of missing values
    pub missing: usize,
    pub mean: Option<f64>,
    /// Median (50th percentile)
    pub median: Option<f64>,
    /// Sample standard deviation
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericSummary {
    /// Compute summary statistics from values; NaN counts as missing
    pub fn from_data(data: &[f64]) -> Self {
        let finite: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
        let missing = data.len() - finite.len();

        if finite.is_empty() {
            return Self::empty(missing);
        }

        let mut sorted = finite.clone();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Self {
            count,
            missing,
            mean: mean(&finite).map(round2),
            median: Some(round2(median)),
            std_dev: sample_std(&finite).map(round2),
            min: sorted.first().copied().map(round2),
            max: sorted.last().copied().map(round2),
        }
    }

    /// Statistics of a column with no values
    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            mean: None,
            median: None,
            std_dev: None,
            min: None,
            max: None,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<f64> {
        Some(round2(self.max? - self.min?))
    }

    /// Named statistics in display order: mean, median, std, min, max
    pub fn key_statistics(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("mean", self.mean),
            ("median", self.median),
            ("std", self.std_dev),
            ("min", self.min),
            ("max", self.max),
        ]
    }
}

/// Describe one numeric column of a dataset
pub fn describe(data: &Dataset, column: &str) -> StatsResult<NumericSummary> {
    let values = data.numeric_column(column)?;
    let cells: Vec<f64> = (0..data.num_rows())
        .map(|i| values.numeric(i).unwrap_or(f64::NAN))
        .collect();

    let summary = NumericSummary::from_data(&cells);
    tracing::debug!(
        column,
        count = summary.count,
        missing = summary.missing,
        "described column"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(16.4987), 16.5);
        assert_eq!(round2(2.345_000_1), 2.35);
        assert_eq!(round2(-1.005_1), -1.01);
        assert_eq!(round2(7.0), 7.0);
    }

    #[test]
    fn test_mean_and_sample_std() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&data), Some(5.0));
        // Population std is 2.0; the sample std is sqrt(32 / 7)
        let std = sample_std(&data).unwrap();
        assert!((std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_no_std() {
        assert_eq!(mean(&[12.5]), Some(12.5));
        assert_eq!(sample_std(&[12.5]), None);
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_summary_basic() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let stats = NumericSummary::from_data(&data);

        assert_eq!(stats.count, 10);
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.max, Some(10.0));
        assert_eq!(stats.mean, Some(5.5));
        assert_eq!(stats.median, Some(5.5));
        assert_eq!(stats.std_dev, Some(3.03));
        assert_eq!(stats.range(), Some(9.0));
    }

    #[test]
    fn test_summary_with_nan() {
        let data = vec![1.0, 2.0, f64::NAN, 4.0, 5.0];
        let stats = NumericSummary::from_data(&data);

        assert_eq!(stats.count, 4);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.median, Some(3.0));
    }

    #[test]
    fn test_summary_empty() {
        let stats = NumericSummary::from_data(&[f64::NAN]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.missing, 1);
        assert!(stats.key_statistics().iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn test_describe_column() {
        let data = Dataset::builder()
            .column("delivery_time", vec![Some(24i64), None, Some(30), Some(27)])
            .column("cuisine_type", vec!["Thai", "Thai", "Korean", "Thai"])
            .build()
            .unwrap();

        let summary = describe(&data, "delivery_time").unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.mean, Some(27.0));
        assert_eq!(summary.median, Some(27.0));
        assert_eq!(summary.std_dev, Some(3.0));

        assert!(describe(&data, "cuisine_type").is_err());
        assert!(describe(&data, "rating").unwrap_err().is_column_not_found());
    }
}
