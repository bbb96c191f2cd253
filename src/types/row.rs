use std::collections::HashMap;

use crate::{
    error::{Result, SqlRigError},
    Column,
};

/// Driver-agnostic raw result from a database query.
/// All values are converted to strings by the driver.
#[derive(Debug, Clone)]
pub struct RawQueryResult {
    /// Column names in order
    pub columns: Vec<String>,
    /// Rows, where each row is a vector of string values in column order
    pub rows: Vec<Vec<String>>,
}

impl RawQueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// A single row result from a query.
/// Values are stored as strings and accessed by column name.
#[derive(Debug, Clone)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// Creates a new Row from column names and values.
    pub(crate) fn new(columns: &[String], values: Vec<String>) -> Self {
        let values = columns
            .iter()
            .zip(values.into_iter())
            .map(|(col, val)| (col.clone(), val))
            .collect();
        Self { values }
    }

    /// Gets a value by column name.
    pub fn get<T: Column + ?Sized>(&self, column: &T) -> Result<&str> {
        self.values
            .get(column.column_name())
            .map(|s| s.as_str())
            .ok_or_else(|| SqlRigError::ColumnNotFound(column.qualified_name()))
    }

    /// Gets a value by column name, or `None` if the column is absent.
    pub fn try_get<T: Column + ?Sized>(&self, column: &T) -> Option<&str> {
        self.values.get(column.column_name()).map(|s| s.as_str())
    }

    /// Returns all column names in this row.
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of a query execution, containing zero or more rows.
#[derive(Debug)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl QueryResult {
    /// Creates a QueryResult from a RawQueryResult.
    pub fn from_raw(raw: RawQueryResult) -> Self {
        let rows = raw
            .rows
            .into_iter()
            .map(|values| Row::new(&raw.columns, values))
            .collect();
        Self {
            columns: raw.columns,
            rows,
        }
    }

    /// Extracts a single row from the result.
    /// Returns an error if the result contains zero or more than one row.
    pub fn single_row(self) -> Result<Row> {
        if self.rows.len() != 1 {
            return Err(SqlRigError::UnexpectedRowCount {
                expected: 1,
                actual: self.rows.len(),
            });
        }
        Ok(self.rows.into_iter().next().unwrap())
    }

    /// Returns all rows from the result.
    pub fn rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns a reference to the rows without consuming the result.
    pub fn rows_ref(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the column names from this result.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of rows in this result.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if this result contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
