//! Column-oriented in-memory dataset
//!
//! A `Dataset` is built once, validated, and then only read. Summarizers take
//! it by shared reference, so any number of callers can work on the same
//! dataset concurrently.

use crate::error::{TableError, TableResult};
use crate::schema::{ColumnDescriptor, DataColumn, DataSchema};
use crate::value::Value;

/// An immutable table of equal-length typed columns
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    schema: DataSchema,
    columns: Vec<DataColumn>,
}

impl Dataset {
    /// Start building a dataset column by column
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Build a dataset from named columns
    pub fn from_columns<N>(columns: Vec<(N, DataColumn)>) -> TableResult<Self>
    where
        N: Into<String>,
    {
        columns
            .into_iter()
            .fold(Self::builder(), |builder, (name, data)| {
                builder.column(name, data)
            })
            .build()
    }

    /// The dataset schema
    pub fn schema(&self) -> &DataSchema {
        &self.schema
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.schema.num_records
    }

    /// Check if the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.column_names()
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> TableResult<&DataColumn> {
        self.schema
            .column_index(name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    /// Get a column by name, requiring a numeric type
    pub fn numeric_column(&self, name: &str) -> TableResult<&DataColumn> {
        let column = self.column(name)?;
        if !column.dtype().is_numeric() {
            return Err(TableError::TypeMismatch {
                column: name.to_string(),
                expected: "numeric".to_string(),
                actual: column.dtype().name().to_string(),
            });
        }
        Ok(column)
    }

    /// Read a single cell
    pub fn value(&self, column: &str, row: usize) -> TableResult<Value> {
        Ok(self.column(column)?.value(row))
    }

    /// Indices of all rows
    pub fn all_rows(&self) -> Vec<usize> {
        (0..self.num_rows()).collect()
    }

    /// Indices of the rows whose `column` cell matches `value`.
    ///
    /// See `Value::matches` for the equality used; missing cells never match.
    pub fn filter_eq(&self, column: &str, value: &Value) -> TableResult<Vec<usize>> {
        let data = self.column(column)?;
        let rows: Vec<usize> = (0..self.num_rows())
            .filter(|&i| data.value(i).matches(value))
            .collect();

        tracing::trace!(
            column,
            %value,
            matched = rows.len(),
            total = self.num_rows(),
            "filtered rows"
        );
        Ok(rows)
    }
}

/// Builder for `Dataset`. Validation is deferred to `build`.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<(ColumnDescriptor, DataColumn)>,
}

impl DatasetBuilder {
    /// Add a column; its type is taken from the data
    pub fn column(mut self, name: impl Into<String>, data: impl Into<DataColumn>) -> Self {
        let data = data.into();
        let descriptor = ColumnDescriptor::new(name, data.dtype());
        self.columns.push((descriptor, data));
        self
    }

    /// Add a column with a full descriptor (e.g. a unit)
    pub fn described_column(
        mut self,
        descriptor: ColumnDescriptor,
        data: impl Into<DataColumn>,
    ) -> Self {
        self.columns.push((descriptor, data.into()));
        self
    }

    /// Validate and build the dataset
    pub fn build(self) -> TableResult<Dataset> {
        let num_records = self.columns.first().map(|(_, c)| c.len()).unwrap_or(0);

        let mut descriptors: Vec<ColumnDescriptor> = Vec::with_capacity(self.columns.len());
        let mut columns = Vec::with_capacity(self.columns.len());

        for (mut descriptor, data) in self.columns {
            if descriptors.iter().any(|d| d.name == descriptor.name) {
                return Err(TableError::DuplicateColumn(descriptor.name));
            }
            if data.len() != num_records {
                return Err(TableError::LengthMismatch {
                    column: descriptor.name,
                    expected: num_records,
                    actual: data.len(),
                });
            }
            // The data decides the type; a descriptor cannot lie about it
            if descriptor.dtype != data.dtype() {
                descriptor.dtype = data.dtype();
            }
            descriptors.push(descriptor);
            columns.push(data);
        }

        tracing::debug!(
            columns = descriptors.len(),
            rows = num_records,
            "built dataset"
        );

        Ok(Dataset {
            schema: DataSchema::new(descriptors, num_records),
            columns,
        })
    }
}
