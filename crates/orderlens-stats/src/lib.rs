//! orderlens-stats - Descriptive statistics and business metrics for order data
//!
//! This crate turns an in-memory order `Dataset` into reporting tables:
//!
//! - **Distribution**: counts and percentage shares of a categorical column
//! - **Filtered distribution**: the same, restricted by an equality filter
//! - **Grouped moments**: per-group mean and sample standard deviation
//! - **Revenue**: tiered take-rate revenue per order and in total
//! - **Metric table**: ordered (name, value, unit) records
//! - **Ranked extremes**: lowest and highest entity averages with a boundary marker
//! - **Summary**: the key statistics of one numeric column
//!
//! # Conventions
//!
//! Every reported statistic is rounded to 2 decimals. Standard deviations use
//! the sample (N-1) denominator and are `None` when undefined. An empty filter
//! or threshold result is a valid empty table, never an error; a missing
//! column always is.

pub mod config;
pub mod distribution;
pub mod error;
pub mod extremes;
pub mod filtered;
pub mod grouped;
pub mod metrics;
pub mod revenue;
pub mod summary;

pub use config::*;
pub use distribution::*;
pub use error::*;
pub use extremes::*;
pub use filtered::*;
pub use grouped::*;
pub use metrics::*;
pub use revenue::*;
pub use summary::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
