//! Filtered frequency distributions
//!
//! Restricts a dataset to the rows where one column equals a value, then
//! counts a second column within that subset. Count and percentage columns
//! are suffixed with the lowercased filter value (`count_weekend`,
//! `percentage_weekend`) so that results for several filter values can sit
//! side by side; `stitch_filtered` does exactly that.
//!
//! # Absent categories
//!
//! Only categories observed in the subset are reported, unless the request
//! carries an explicit category domain. Domain categories that were not
//! observed are then added with count 0 and percentage 0. Observed categories
//! outside the domain are kept. An empty subset always yields an empty
//! result, domain or not.

use orderlens_table::{Dataset, ResultTable, Value};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::distribution::{rows_to_table, value_counts, with_percentages, DistributionRow};
use crate::error::StatsResult;

/// Sort order by count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Ascending when `ascending` is true, else descending
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

/// Distribution of one column within a filtered subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredDistribution {
    /// Summarized column
    pub column: String,
    pub filter_column: String,
    pub filter_value: Value,
    /// Number of counted rows in the subset
    pub total: usize,
    pub rows: Vec<DistributionRow>,
}

impl FilteredDistribution {
    /// Lowercased filter value used in column names
    pub fn suffix(&self) -> String {
        self.filter_value.to_string().to_lowercase()
    }

    /// Name of the count column, e.g. `count_weekend`
    pub fn count_column(&self) -> String {
        format!("count_{}", self.suffix())
    }

    /// Name of the percentage column, e.g. `percentage_weekend`
    pub fn percentage_column(&self) -> String {
        format!("percentage_{}", self.suffix())
    }

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

    /// Render as `[<column>, count_<v>, percentage_<v>]`
    pub fn to_table(&self) -> ResultTable {
        rows_to_table(
            &self.column,
            &self.count_column(),
            &self.percentage_column(),
            &self.rows,
        )
    }
}

/// A filtered distribution request
#[derive(Debug, Clone)]
pub struct FilteredStatsRequest {
    column: String,
    filter_column: String,
    filter_value: Value,
    order: SortOrder,
    categories: Option<Vec<Value>>,
}

impl FilteredStatsRequest {
    /// Count `column` over the rows where `filter_column == filter_value`
    pub fn new(
        column: impl Into<String>,
        filter_column: impl Into<String>,
        filter_value: impl Into<Value>,
    ) -> Self {
        Self {
            column: column.into(),
            filter_column: filter_column.into(),
            filter_value: filter_value.into(),
            order: SortOrder::default(),
            categories: None,
        }
    }

    /// Set the sort order
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Report these categories even when absent from the subset
    pub fn with_categories<I, V>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Run the request against a dataset
    pub fn run(&self, data: &Dataset) -> StatsResult<FilteredDistribution> {
        let values = data.column(&self.column)?;
        let rows = data.filter_eq(&self.filter_column, &self.filter_value)?;

        let mut counts = value_counts(values, rows);
        let total: usize = counts.iter().map(|(_, c)| c).sum();

        if total > 0 {
            if let Some(domain) = &self.categories {
                let seen: HashSet<Value> = counts.iter().map(|(v, _)| v.clone()).collect();
                let mut added = HashSet::new();
                for category in domain {
                    if !seen.contains(category) && added.insert(category.clone()) {
                        counts.push((category.clone(), 0));
                    }
                }
            }
        }

        // Stable: ties stay in first-seen order
        match self.order {
            SortOrder::Ascending => counts.sort_by(|a, b| a.1.cmp(&b.1)),
            SortOrder::Descending => counts.sort_by(|a, b| b.1.cmp(&a.1)),
        }

        let rows = with_percentages(counts, total);
        if rows.is_empty() {
            tracing::debug!(
                column = %self.column,
                filter_column = %self.filter_column,
                filter_value = %self.filter_value,
                "filter matched no counted rows"
            );
        } else {
            tracing::debug!(
                column = %self.column,
                filter_column = %self.filter_column,
                filter_value = %self.filter_value,
                total,
                distinct = rows.len(),
                "computed filtered distribution"
            );
        }

        Ok(FilteredDistribution {
            column: self.column.clone(),
            filter_column: self.filter_column.clone(),
            filter_value: self.filter_value.clone(),
            total,
            rows,
        })
    }
}

/// Counts and percentage distribution of `column` within the rows where
/// `filter_column == filter_value`.
pub fn feature_filtered_stats(
    data: &Dataset,
    column: &str,
    filter_column: &str,
    filter_value: impl Into<Value>,
    order: SortOrder,
) -> StatsResult<FilteredDistribution> {
    FilteredStatsRequest::new(column, filter_column, filter_value)
        .with_order(order)
        .run(data)
}

/// Join filtered distributions side by side on their category column.
///
/// Categories appear in order of first appearance across `parts`; a category
/// missing from one part gets 0 in that part's columns. The category column
/// is named after the first part's summarized column.
pub fn stitch_filtered(parts: &[FilteredDistribution]) -> ResultTable {
    let category_column = parts.first().map(|p| p.column.as_str()).unwrap_or("category");

    let mut columns = vec![category_column.to_string()];
    for part in parts {
        columns.push(part.count_column());
        columns.push(part.percentage_column());
    }

    let mut order: Vec<&Value> = Vec::new();
    let mut seen: HashSet<&Value> = HashSet::new();
    let lookups: Vec<HashMap<&Value, &DistributionRow>> = parts
        .iter()
        .map(|p| p.rows.iter().map(|r| (&r.category, r)).collect())
        .collect();
    for part in parts {
        for row in &part.rows {
            if seen.insert(&row.category) {
                order.push(&row.category);
            }
        }
    }

    let mut rows = Vec::with_capacity(order.len());
    for category in order {
        let mut row = vec![category.clone()];
        for lookup in &lookups {
            match lookup.get(category) {
                Some(r) => {
                    row.push(Value::from(r.count));
                    row.push(Value::Float(r.percentage));
                }
                None => {
                    row.push(Value::Int(0));
                    row.push(Value::Float(0.0));
                }
            }
        }
        rows.push(row);
    }
    ResultTable::from_parts(columns, rows)
}
