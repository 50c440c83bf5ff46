//! Core dataset types.

use serde::{Deserialize, Serialize};

/// Values of a single column. `None` marks a missing observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColumnValues {
    /// Floating-point measurements.
    Numeric(Vec<Option<f64>>),
    /// Category labels (text, booleans, low-cardinality codes).
    Categorical(Vec<Option<String>>),
}

/// A single named column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self { name: name.into(), values: ColumnValues::Numeric(values) }
    }

    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self { name: name.into(), values: ColumnValues::Categorical(values) }
    }

    /// Numeric column with no missing values.
    pub fn numeric_complete(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::numeric(name, values.into_iter().map(Some).collect())
    }

    /// Categorical column with no missing values.
    pub fn categorical_complete(name: impl Into<String>, values: Vec<&str>) -> Self {
        Self::categorical(name, values.into_iter().map(|v| Some(v.to_string())).collect())
    }

    pub fn len(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.values, ColumnValues::Numeric(_))
    }

    /// Numeric values, or `None` for a categorical column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.values {
            ColumnValues::Numeric(v) => Some(v),
            ColumnValues::Categorical(_) => None,
        }
    }

    /// Categorical values, or `None` for a numeric column.
    pub fn as_categorical(&self) -> Option<&[Option<String>]> {
        match &self.values {
            ColumnValues::Numeric(_) => None,
            ColumnValues::Categorical(v) => Some(v),
        }
    }
}

/// An immutable tabular dataset: an ordered collection of named columns.
///
/// The analysis core never mutates a dataset; loaders build it once and
/// hand out references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn empty() -> Self {
        Self { columns: Vec::new() }
    }

    /// Build a dataset of complete numeric columns from row-major records.
    /// Ragged rows are truncated to the named columns; short rows leave
    /// trailing columns missing for that row.
    pub fn from_numeric_rows(names: &[&str], rows: &[Vec<f64>]) -> Self {
        let columns = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let values = rows.iter().map(|row| row.get(i).copied()).collect();
                Column::numeric(*name, values)
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Number of rows (length of the longest column).
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_numeric())
    }

    pub fn categorical_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.is_numeric())
    }
}
