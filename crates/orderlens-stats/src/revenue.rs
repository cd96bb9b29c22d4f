//! Tiered take-rate revenue
//!
//! Revenue per order is a piecewise function of the order cost:
//!
//! | cost              | revenue            |
//! |-------------------|--------------------|
//! | cost > 20         | cost × upper rate  |
//! | 5 < cost ≤ 20     | cost × lower rate  |
//! | cost ≤ 5          | 0                  |
//!
//! Both thresholds are exclusive: an order of exactly 20 earns the lower
//! rate and an order of exactly 5 earns nothing. The function is total;
//! negative and NaN costs earn nothing.

use orderlens_table::Dataset;
use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Costs strictly above this earn the upper rate
pub const UPPER_TIER_THRESHOLD: f64 = 20.0;
/// Costs strictly above this (and not above the upper threshold) earn the lower rate
pub const LOWER_TIER_THRESHOLD: f64 = 5.0;

/// Revenue earned on one order of cost `cost`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn revenue(cost: f64, upper_rate: f64, lower_rate: f64) -> f64 {
    match RevenueTier::for_cost(cost) {
        RevenueTier::Upper => cost * upper_rate,
        RevenueTier::Lower => cost * lower_rate,
        RevenueTier::Untaxed => 0.0,
    }
}

/// Which rate an order cost falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueTier {
    Upper,
    Lower,
    Untaxed,
}

impl RevenueTier {
    /// Classify an order cost. NaN is untaxed.
    pub fn for_cost(cost: f64) -> Self {
        if cost > UPPER_TIER_THRESHOLD {
            RevenueTier::Upper
        } else if cost > LOWER_TIER_THRESHOLD {
            RevenueTier::Lower
        } else {
            RevenueTier::Untaxed
        }
    }
}

/// Upper and lower take rates, as fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct RevenueRates {
    /// Rate for orders above the upper threshold
    pub upper: f64,
    /// Rate for orders between the thresholds
    pub lower: f64,
}

impl Default for RevenueRates {
    fn default() -> Self {
        Self {
            upper: 0.25,
            lower: 0.15,
        }
    }
}

impl RevenueRates {
    pub fn new(upper: f64, lower: f64) -> Self {
        Self { upper, lower }
    }

    /// Revenue earned on one order
    pub fn apply(&self, cost: f64) -> f64 {
        revenue(cost, self.upper, self.lower)
    }

    /// Both rates must be finite fractions in [0, 1]
    pub fn validate(&self) -> StatsResult<()> {
        for (name, rate) in [("upper", self.upper), ("lower", self.lower)] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(StatsError::InvalidConfig(format!(
                    "{} rate must be between 0.0 and 1.0, got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }
}

/// Revenue totals over a cost column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Rows in the dataset
    pub orders: usize,
    pub upper_tier_orders: usize,
    pub lower_tier_orders: usize,
    /// Orders at or below the lower threshold (missing costs excluded)
    pub untaxed_orders: usize,
    /// Orders with a missing cost; they earn nothing
    pub missing: usize,
    /// Unrounded revenue sum
    pub total: f64,
}

/// Sum per-order revenue over the numeric `cost_column`
pub fn total_revenue(
    data: &Dataset,
    cost_column: &str,
    rates: RevenueRates,
) -> StatsResult<RevenueSummary> {
    let costs = data.numeric_column(cost_column)?;

    let mut summary = RevenueSummary {
        orders: data.num_rows(),
        upper_tier_orders: 0,
        lower_tier_orders: 0,
        untaxed_orders: 0,
        missing: 0,
        total: 0.0,
    };

    for row in 0..data.num_rows() {
        let Some(cost) = costs.numeric(row) else {
            summary.missing += 1;
            continue;
        };
        match RevenueTier::for_cost(cost) {
            RevenueTier::Upper => summary.upper_tier_orders += 1,
            RevenueTier::Lower => summary.lower_tier_orders += 1,
            RevenueTier::Untaxed => summary.untaxed_orders += 1,
        }
        summary.total += rates.apply(cost);
    }

    tracing::debug!(
        cost_column,
        orders = summary.orders,
        total = summary.total,
        "computed total revenue"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(revenue(20.0, 0.25, 0.15), 20.0 * 0.15);
        assert_eq!(revenue(5.0, 0.25, 0.15), 0.0);
        assert_eq!(revenue(5.01, 0.25, 0.15), 5.01 * 0.15);
        assert_eq!(revenue(20.01, 0.25, 0.15), 20.01 * 0.25);
    }

    #[test]
    fn test_negative_and_nan_costs() {
        assert_eq!(revenue(-5.0, 0.3, 0.2), 0.0);
        assert_eq!(revenue(f64::NAN, 0.3, 0.2), 0.0);
        assert_eq!(revenue(0.0, 0.3, 0.2), 0.0);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(RevenueTier::for_cost(20.0), RevenueTier::Lower);
        assert_eq!(RevenueTier::for_cost(20.5), RevenueTier::Upper);
        assert_eq!(RevenueTier::for_cost(5.0), RevenueTier::Untaxed);
        assert_eq!(RevenueTier::for_cost(f64::NAN), RevenueTier::Untaxed);
    }

    #[test]
    fn test_revenue_follows_tier() {
        for cost in [-1.0, 0.0, 5.0, 5.01, 19.99, 20.0, 20.01, 250.0] {
            let expected = match RevenueTier::for_cost(cost) {
                RevenueTier::Upper => cost * 0.3,
                RevenueTier::Lower => cost * 0.2,
                RevenueTier::Untaxed => 0.0,
            };
            assert_eq!(revenue(cost, 0.3, 0.2), expected, "cost {}", cost);
        }
    }

    #[test]
    fn test_rates_validate() {
        assert!(RevenueRates::default().validate().is_ok());
        assert!(RevenueRates::new(1.5, 0.1).validate().is_err());
        assert!(RevenueRates::new(0.2, -0.1).validate().is_err());
        assert!(RevenueRates::new(f64::NAN, 0.1).validate().is_err());
    }

    #[test]
    fn test_total_revenue() {
        let data = Dataset::builder()
            .column(
                "cost_of_the_order",
                vec![Some(30.0), Some(10.0), Some(4.0), None, Some(20.0)],
            )
            .build()
            .unwrap();

        let summary = total_revenue(&data, "cost_of_the_order", RevenueRates::default()).unwrap();
        assert_eq!(summary.orders, 5);
        assert_eq!(summary.upper_tier_orders, 1);
        assert_eq!(summary.lower_tier_orders, 2);
        assert_eq!(summary.untaxed_orders, 1);
        assert_eq!(summary.missing, 1);
        // 30 * 0.25 + 10 * 0.15 + 20 * 0.15
        assert!((summary.total - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_revenue_missing_column() {
        let data = Dataset::builder().column("x", vec![1.0]).build().unwrap();
        assert!(total_revenue(&data, "cost_of_the_order", RevenueRates::default())
            .unwrap_err()
            .is_column_not_found());
    }
}
