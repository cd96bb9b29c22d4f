//! Row grouping by an ordered tuple of column values

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::error::TableResult;
use crate::schema::DataColumn;
use crate::value::Value;

/// Ordered tuple of group-by values, one per group-by column
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupKey(pub Vec<Value>);

impl GroupKey {
    /// Key values in group-by column order
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// First key value (the whole key for single-column groupings)
    pub fn first(&self) -> Option<&Value> {
        self.0.first()
    }

    /// Check if any key component is missing
    pub fn has_null(&self) -> bool {
        self.0.iter().any(Value::is_null)
    }
}

/// A partition of rows sharing one key
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: GroupKey,
    /// Row indices, in dataset order
    pub rows: Vec<usize>,
}

impl Group {
    /// Number of rows in the group
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the group has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Partition `rows` of `dataset` by the values of the `by` columns.
///
/// Groups come back in order of first appearance. Rows whose key has a missing
/// component are dropped. Fails with `ColumnNotFound` before touching any row
/// if a `by` column is absent.
pub fn group_rows<I>(dataset: &Dataset, by: &[&str], rows: I) -> TableResult<Vec<Group>>
where
    I: IntoIterator<Item = usize>,
{
    let columns: Vec<&DataColumn> = by
        .iter()
        .map(|name| dataset.column(name))
        .collect::<TableResult<_>>()?;

    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();
    let mut dropped = 0usize;

    for row in rows {
        let key = GroupKey(columns.iter().map(|c| c.value(row)).collect());
        if key.has_null() {
            dropped += 1;
            continue;
        }
        match index.get(&key) {
            Some(&slot) => groups[slot].rows.push(row),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    rows: vec![row],
                });
            }
        }
    }

    tracing::trace!(
        by = ?by,
        groups = groups.len(),
        dropped,
        "grouped rows"
    );
    Ok(groups)
}

/// Sort groups ascending by key
pub fn sort_groups(groups: &mut [Group]) {
    groups.sort_by(|a, b| a.key.cmp(&b.key));
}
