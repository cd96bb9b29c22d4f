//! Metric tables
//!
//! A metric table is an ordered list of named values with a unit symbol.
//! Order is the order in which metrics were added; it is stored as a `Vec`,
//! never derived from a map.

use orderlens_table::{ResultTable, Value};
use serde::{Deserialize, Serialize};

use crate::summary::round2;

/// One named metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct MetricRecord {
    pub name: String,
    /// Unit symbol, copied verbatim
    pub unit: String,
    /// Rounded to 2 decimals
    pub value: f64,
}

/// Ordered collection of metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTable {
    records: Vec<MetricRecord>,
}

impl MetricTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a metric (builder style)
    pub fn with_metric(mut self, name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        self.push(name, value, unit);
        self
    }

    /// Add a metric
    pub fn push(&mut self, name: impl Into<String>, value: f64, unit: impl Into<String>) {
        self.records.push(MetricRecord {
            name: name.into(),
            unit: unit.into(),
            value: round2(value),
        });
    }

    /// Records in insertion order
    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    /// Look up a metric by name (first match)
    pub fn get(&self, name: &str) -> Option<&MetricRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render as `[metric, unit, value]`
    pub fn to_table(&self) -> ResultTable {
        let rows = self
            .records
            .iter()
            .map(|record| {
                vec![
                    Value::from(record.name.as_str()),
                    Value::from(record.unit.as_str()),
                    Value::Float(record.value),
                ]
            })
            .collect();
        ResultTable::from_parts(["metric", "unit", "value"], rows)
    }
}

impl<N, U> FromIterator<(N, f64, U)> for MetricTable
where
    N: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, f64, U)>>(iter: I) -> Self {
        let mut table = MetricTable::new();
        for (name, value, unit) in iter {
            table.push(name, value, unit);
        }
        table
    }
}

/// Build a metric table from `(name, value, unit)` triples, keeping their order
pub fn metrics_to_table<N, U>(metrics: impl IntoIterator<Item = (N, f64, U)>) -> MetricTable
where
    N: Into<String>,
    U: Into<String>,
{
    metrics.into_iter().collect()
}
