//! Flat result tables
//!
//! Every summarizer can render its output as a `ResultTable`: ordered column
//! names plus uniformly shaped rows. Presentation layers read column names
//! dynamically, so the table never relies on an implicit index.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{TableError, TableResult};
use crate::value::Value;

/// Ordered columns and rows of cell values.
///
/// Every row has exactly one cell per column, whether the table was built
/// row by row, from parts, or deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Unchecked wire shape of a `ResultTable`
#[derive(Deserialize)]
struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl TryFrom<RawTable> for ResultTable {
    type Error = TableError;

    fn try_from(raw: RawTable) -> TableResult<Self> {
        let mut table = ResultTable::new(raw.columns);
        for row in raw.rows {
            table.push_row(row)?;
        }
        Ok(table)
    }
}

impl ResultTable {
    /// Create an empty table with the given columns
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from rows whose width is known to match `columns`.
    ///
    /// Width mismatches are a bug in the caller; in release builds short rows
    /// are padded with `Null` and long rows truncated.
    pub fn from_parts<I, S>(columns: I, rows: Vec<Vec<Value>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns);
        let width = table.columns.len();
        table.rows = rows
            .into_iter()
            .map(|mut row| {
                debug_assert_eq!(row.len(), width, "row width must match the header");
                row.resize(width, Value::Null);
                row
            })
            .collect();
        table
    }

    /// Append a row; it must have one cell per column
    pub fn push_row(&mut self, row: Vec<Value>) -> TableResult<()> {
        if row.len() != self.columns.len() {
            return Err(TableError::LengthMismatch {
                column: format!("row {}", self.rows.len()),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Read one cell
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All cells of one column
    pub fn column_values(&self, name: &str) -> TableResult<Vec<&Value>> {
        let col = self
            .column_index(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))?;
        Ok(self.rows.iter().map(|r| &r[col]).collect())
    }

    /// Serialize as a JSON array of records, keys in column order
    pub fn to_json_records(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Records(self))
    }
}

/// Record-oriented view of a table
struct Records<'a>(&'a ResultTable);

impl Serialize for Records<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let table = self.0;
        let mut seq = serializer.serialize_seq(Some(table.rows.len()))?;
        for row in &table.rows {
            seq.serialize_element(&Record {
                columns: &table.columns,
                row,
            })?;
        }
        seq.end()
    }
}

struct Record<'a> {
    columns: &'a [String],
    row: &'a [Value],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in self.columns.iter().zip(self.row) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
