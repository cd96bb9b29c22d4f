//! Grouped mean and standard deviation
//!
//! Partitions rows by the distinct combination of one or more group-by
//! columns and computes, per group and per numeric feature, the mean and the
//! sample standard deviation. Group-by columns always come as an ordered
//! slice, even when there is only one.

use orderlens_table::{group_rows, sort_groups, Dataset, GroupKey, ResultTable, Value};
use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::summary::{mean, round2, sample_std};

/// Mean and standard deviation of one feature within one group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    /// `None` when the group has no non-missing value
    pub mean: Option<f64>,
    /// `None` when the group has fewer than two non-missing values
    pub std: Option<f64>,
}

impl Moments {
    fn from_values(values: &[f64]) -> Self {
        Self {
            mean: mean(values).map(round2),
            std: sample_std(values).map(round2),
        }
    }
}

/// One output row: a group key and the moments of every feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMoments {
    pub key: GroupKey,
    /// Number of rows in the group
    pub count: usize,
    /// Moments in feature order
    pub moments: Vec<Moments>,
}

/// Per-group moments, ordered ascending by group key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedMoments {
    pub group_by: Vec<String>,
    pub features: Vec<String>,
    pub groups: Vec<GroupMoments>,
}

impl GroupedMoments {
    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Moments of `feature` for the group with `key`
    pub fn get(&self, key: &[Value], feature: &str) -> Option<Moments> {
        let feature_index = self.features.iter().position(|f| f == feature)?;
        self.groups
            .iter()
            .find(|g| g.key.values() == key)
            .map(|g| g.moments[feature_index])
    }

    /// Render flat: group-by columns, then `<feature>_mean`, `<feature>_std`
    /// per feature. Undefined statistics are `Null`.
    pub fn to_table(&self) -> ResultTable {
        let mut columns: Vec<String> = self.group_by.clone();
        for feature in &self.features {
            columns.push(format!("{}_mean", feature));
            columns.push(format!("{}_std", feature));
        }

        let rows = self
            .groups
            .iter()
            .map(|group| {
                let mut row: Vec<Value> = group.key.values().to_vec();
                for m in &group.moments {
                    row.push(m.mean.into());
                    row.push(m.std.into());
                }
                row
            })
            .collect();
        ResultTable::from_parts(columns, rows)
    }
}

/// Mean and sample standard deviation of `features`, grouped by `group_by`.
///
/// Fails with `ColumnNotFound` for any unknown column, `TypeMismatch` for a
/// non-numeric feature, and `EmptySelection` if either list is empty. Rows
/// with a missing group-by cell are left out; missing feature cells are
/// skipped within their group.
pub fn feature_grouped_stats(
    data: &Dataset,
    group_by: &[&str],
    features: &[&str],
) -> StatsResult<GroupedMoments> {
    if group_by.is_empty() {
        return Err(StatsError::EmptySelection(
            "at least one group-by column is required".to_string(),
        ));
    }
    if features.is_empty() {
        return Err(StatsError::EmptySelection(
            "at least one feature column is required".to_string(),
        ));
    }

    let feature_columns = features
        .iter()
        .map(|f| data.numeric_column(f))
        .collect::<Result<Vec<_>, _>>()?;

    let mut groups = group_rows(data, group_by, 0..data.num_rows())?;
    sort_groups(&mut groups);

    let groups: Vec<GroupMoments> = groups
        .into_iter()
        .map(|group| {
            let moments = feature_columns
                .iter()
                .map(|column| {
                    let values: Vec<f64> =
                        group.rows.iter().filter_map(|&i| column.numeric(i)).collect();
                    Moments::from_values(&values)
                })
                .collect();
            tracing::trace!(key = ?group.key, rows = group.len(), "group moments");
            GroupMoments {
                count: group.len(),
                key: group.key,
                moments,
            }
        })
        .collect();

    tracing::debug!(
        group_by = ?group_by,
        features = ?features,
        groups = groups.len(),
        "computed grouped moments"
    );

    Ok(GroupedMoments {
        group_by: group_by.iter().map(|s| s.to_string()).collect(),
        features: features.iter().map(|s| s.to_string()).collect(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderlens_table::TableError;

    fn orders() -> Dataset {
        Dataset::builder()
            .column(
                "cuisine_type",
                vec!["Thai", "Korean", "Thai", "Korean", "Thai", "Spanish"],
            )
            .column(
                "day_of_the_week",
                vec!["Weekend", "Weekday", "Weekday", "Weekend", "Weekend", "Weekend"],
            )
            .column(
                "delivery_time",
                vec![Some(20i64), Some(30), Some(26), Some(28), Some(24), Some(25)],
            )
            .column(
                "cost_of_the_order",
                vec![Some(12.5), Some(30.0), None, Some(10.0), Some(14.5), Some(29.1)],
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_single_group_column() {
        let stats =
            feature_grouped_stats(&orders(), &["cuisine_type"], &["delivery_time"]).unwrap();

        // Sorted by key
        let keys: Vec<_> = stats.groups.iter().map(|g| g.key.values()[0].clone()).collect();
        assert_eq!(
            keys,
            vec![Value::from("Korean"), Value::from("Spanish"), Value::from("Thai")]
        );

        let thai = stats.get(&[Value::from("Thai")], "delivery_time").unwrap();
        assert_eq!(thai.mean, Some(23.33));
        assert_eq!(thai.std, Some(3.06));
    }

    #[test]
    fn test_single_member_group_has_undefined_std() {
        let stats =
            feature_grouped_stats(&orders(), &["cuisine_type"], &["delivery_time"]).unwrap();
        let spanish = stats.get(&[Value::from("Spanish")], "delivery_time").unwrap();
        assert_eq!(spanish.mean, Some(25.0));
        assert_eq!(spanish.std, None);
    }

    #[test]
    fn test_missing_feature_cells_are_skipped() {
        let stats =
            feature_grouped_stats(&orders(), &["cuisine_type"], &["cost_of_the_order"]).unwrap();
        let thai = stats.get(&[Value::from("Thai")], "cost_of_the_order").unwrap();
        assert_eq!(thai.mean, Some(13.5));
        assert_eq!(thai.std, Some(1.41));
    }

    #[test]
    fn test_multi_column_groups_flat_table() {
        let stats = feature_grouped_stats(
            &orders(),
            &["cuisine_type", "day_of_the_week"],
            &["delivery_time", "cost_of_the_order"],
        )
        .unwrap();
        assert_eq!(stats.len(), 5);

        let table = stats.to_table();
        assert_eq!(
            table.columns(),
            [
                "cuisine_type",
                "day_of_the_week",
                "delivery_time_mean",
                "delivery_time_std",
                "cost_of_the_order_mean",
                "cost_of_the_order_std"
            ]
        );
        // (Korean, Weekday) is first and has a single row
        assert_eq!(table.get(0, "cuisine_type"), Some(&Value::from("Korean")));
        assert_eq!(table.get(0, "day_of_the_week"), Some(&Value::from("Weekday")));
        assert_eq!(table.get(0, "delivery_time_mean"), Some(&Value::Float(30.0)));
        assert_eq!(table.get(0, "delivery_time_std"), Some(&Value::Null));
    }

    #[test]
    fn test_errors() {
        let data = orders();
        assert!(feature_grouped_stats(&data, &["rating"], &["delivery_time"])
            .unwrap_err()
            .is_column_not_found());
        assert!(feature_grouped_stats(&data, &["cuisine_type"], &["rating"])
            .unwrap_err()
            .is_column_not_found());
        assert!(matches!(
            feature_grouped_stats(&data, &["cuisine_type"], &["day_of_the_week"]),
            Err(StatsError::Table(TableError::TypeMismatch { .. }))
        ));
        assert!(matches!(
            feature_grouped_stats(&data, &[], &["delivery_time"]),
            Err(StatsError::EmptySelection(_))
        ));
        assert!(matches!(
            feature_grouped_stats(&data, &["cuisine_type"], &[]),
            Err(StatsError::EmptySelection(_))
        ));
    }
}
