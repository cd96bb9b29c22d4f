//! Frequency distributions of categorical columns
//!
//! A distribution counts the distinct values of one column and reports each
//! value's share of the counted rows as a percentage. Missing cells are not
//! counted and do not contribute to the total.
//!
//! # Ordering
//!
//! Rows are ordered by descending count. Ties keep the order in which the
//! values first appear in the dataset.

use orderlens_table::{DataColumn, Dataset, ResultTable, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::StatsResult;
use crate::summary::round2;

/// Column name for counts in distribution tables
pub const COUNT_COLUMN: &str = "count";
/// Column name for percentages in distribution tables
pub const PERCENTAGE_COLUMN: &str = "percentage";

/// One distinct value and its frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub category: Value,
    pub count: usize,
    /// Share of the counted rows, 0-100, rounded to 2 decimals
    pub percentage: f64,
}

/// Counts and percentages of a column's distinct values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Summarized column
    pub column: String,
    /// Number of counted (non-missing) rows before any cap
    pub total: usize,
    pub rows: Vec<DistributionRow>,
}

impl Distribution {
    /// Number of rows in the result
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the result is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the row of one category
    pub fn get(&self, category: &Value) -> Option<&DistributionRow> {
        self.rows.iter().find(|r| &r.category == category)
    }

    /// Render as `[<column>, count, percentage]`
    pub fn to_table(&self) -> ResultTable {
        rows_to_table(&self.column, COUNT_COLUMN, PERCENTAGE_COLUMN, &self.rows)
    }
}

/// Count the distinct values of `rows` in `column`, in first-seen order.
/// Missing cells are skipped.
pub(crate) fn value_counts<I>(column: &DataColumn, rows: I) -> Vec<(Value, usize)>
where
    I: IntoIterator<Item = usize>,
{
    let mut index: HashMap<Value, usize> = HashMap::new();
    let mut counts: Vec<(Value, usize)> = Vec::new();

    for row in rows {
        let value = column.value(row);
        if value.is_null() {
            continue;
        }
        match index.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts
}

/// Attach percentages of `total` to counted values
pub(crate) fn with_percentages(counts: Vec<(Value, usize)>, total: usize) -> Vec<DistributionRow> {
    if total == 0 {
        return Vec::new();
    }
    counts
        .into_iter()
        .map(|(category, count)| DistributionRow {
            category,
            count,
            percentage: round2(100.0 * count as f64 / total as f64),
        })
        .collect()
}

pub(crate) fn rows_to_table(
    category_column: &str,
    count_column: &str,
    percentage_column: &str,
    rows: &[DistributionRow],
) -> ResultTable {
    let cells = rows
        .iter()
        .map(|row| {
            vec![
                row.category.clone(),
                Value::from(row.count),
                Value::Float(row.percentage),
            ]
        })
        .collect();
    ResultTable::from_parts([category_column, count_column, percentage_column], cells)
}

/// Counts and percentage distribution of the distinct values in `column`.
///
/// `cap` keeps only the first `n` rows of the ordered result; `None` keeps all.
/// Percentages are always relative to every counted row, not to the capped rows.
pub fn feature_stats(data: &Dataset, column: &str, cap: Option<usize>) -> StatsResult<Distribution> {
    let values = data.column(column)?;

    let mut counts = value_counts(values, 0..data.num_rows());
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    // Stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut rows = with_percentages(counts, total);
    let distinct = rows.len();
    if let Some(n) = cap {
        rows.truncate(n);
    }

    tracing::debug!(
        column,
        total,
        distinct,
        reported = rows.len(),
        "computed distribution"
    );

    Ok(Distribution {
        column: column.to_string(),
        total,
        rows,
    })
}
