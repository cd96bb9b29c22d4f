//! Schema and column types for order datasets

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Schema describing the structure of a dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSchema {
    /// Column descriptors, in insertion order
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records
    pub num_records: usize,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
        }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Data type
    pub dtype: ColumnType,

    /// Unit symbol, e.g. "$" or "min"
    pub unit: Option<String>,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
            unit: None,
        }
    }

    /// Set the unit
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Float64,
    Int64,
    Bool,
    String,
}

impl ColumnType {
    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Float64 | ColumnType::Int64)
    }

    /// Lowercase type name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Float64 => "float64",
            ColumnType::Int64 => "int64",
            ColumnType::Bool => "bool",
            ColumnType::String => "string",
        }
    }
}

/// A column of data. `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq)]
pub enum DataColumn {
    Float64(Vec<Option<f64>>),
    Int64(Vec<Option<i64>>),
    Bool(Vec<Option<bool>>),
    String(Vec<Option<String>>),
}

impl DataColumn {
    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        match self {
            DataColumn::Float64(_) => ColumnType::Float64,
            DataColumn::Int64(_) => ColumnType::Int64,
            DataColumn::Bool(_) => ColumnType::Bool,
            DataColumn::String(_) => ColumnType::String,
        }
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        match self {
            DataColumn::Float64(v) => v.len(),
            DataColumn::Int64(v) => v.len(),
            DataColumn::Bool(v) => v.len(),
            DataColumn::String(v) => v.len(),
        }
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read one cell. Out-of-range rows and NaN read as missing.
    pub fn value(&self, row: usize) -> Value {
        match self {
            DataColumn::Float64(v) => v
                .get(row)
                .copied()
                .flatten()
                .filter(|x| !x.is_nan())
                .into(),
            DataColumn::Int64(v) => v.get(row).copied().flatten().into(),
            DataColumn::Bool(v) => v.get(row).copied().flatten().into(),
            DataColumn::String(v) => v.get(row).cloned().flatten().into(),
        }
    }

    /// Read one cell as f64 (numeric columns only; NaN reads as missing)
    pub fn numeric(&self, row: usize) -> Option<f64> {
        match self {
            DataColumn::Float64(v) => v.get(row).copied().flatten().filter(|x| !x.is_nan()),
            DataColumn::Int64(v) => v.get(row).copied().flatten().map(|x| x as f64),
            _ => None,
        }
    }
}

impl From<Vec<f64>> for DataColumn {
    fn from(v: Vec<f64>) -> Self {
        DataColumn::Float64(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<f64>>> for DataColumn {
    fn from(v: Vec<Option<f64>>) -> Self {
        DataColumn::Float64(v)
    }
}

impl From<Vec<i64>> for DataColumn {
    fn from(v: Vec<i64>) -> Self {
        DataColumn::Int64(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<i64>>> for DataColumn {
    fn from(v: Vec<Option<i64>>) -> Self {
        DataColumn::Int64(v)
    }
}

impl From<Vec<bool>> for DataColumn {
    fn from(v: Vec<bool>) -> Self {
        DataColumn::Bool(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<String>> for DataColumn {
    fn from(v: Vec<String>) -> Self {
        DataColumn::String(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<String>>> for DataColumn {
    fn from(v: Vec<Option<String>>) -> Self {
        DataColumn::String(v)
    }
}

impl From<Vec<&str>> for DataColumn {
    fn from(v: Vec<&str>) -> Self {
        DataColumn::String(v.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl From<Vec<Option<&str>>> for DataColumn {
    fn from(v: Vec<Option<&str>>) -> Self {
        DataColumn::String(v.into_iter().map(|s| s.map(str::to_string)).collect())
    }
}
