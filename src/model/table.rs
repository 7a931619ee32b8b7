//! Table and Row data structures

use serde::Serialize;

use crate::error::{Error, Result};

/// The missing-value sentinel
pub const MISSING: &str = "";

/// Returns true if the cell holds the missing-value sentinel
pub fn is_missing(cell: &str) -> bool {
    cell.is_empty()
}

/// A row in the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    fn empty(num_cols: usize) -> Result<Self> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(num_cols)?;
        cells.resize(num_cols, String::new());
        Ok(Self { cells })
    }

    /// Cell values in column order
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [String] {
        &mut self.cells
    }

    /// Owned copy of the cells, as handed out by views
    pub fn to_vec(&self) -> Vec<String> {
        self.cells.clone()
    }
}

/// A table of text cells with named columns.
///
/// Every row holds exactly [`Table::num_cols`] cells; the fields are private so
/// that invariant cannot be broken from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table of `num_rows` x `num_cols` empty cells with empty headers
    pub fn new(num_rows: usize, num_cols: usize) -> Result<Self> {
        let mut headers = Vec::new();
        headers.try_reserve_exact(num_cols)?;
        headers.resize(num_cols, String::new());

        let mut rows = Vec::new();
        rows.try_reserve_exact(num_rows)?;
        for _ in 0..num_rows {
            rows.push(Row::empty(num_cols)?);
        }

        Ok(Self { headers, rows })
    }

    /// Create a table with no rows and the given column names
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, copying `values`. The row must have one value per column.
    pub fn append_row<S: AsRef<str>>(&mut self, values: &[S]) -> Result<()> {
        if values.len() != self.num_cols() {
            return Err(Error::ShapeMismatch {
                expected: self.num_cols(),
                found: values.len(),
            });
        }

        let mut cells = Vec::new();
        cells.try_reserve_exact(values.len())?;
        cells.extend(values.iter().map(|v| v.as_ref().to_owned()));

        self.rows.try_reserve(1)?;
        self.rows.push(Row { cells });
        Ok(())
    }

    /// Replace the column names
    pub fn set_headers<S: AsRef<str>>(&mut self, headers: &[S]) -> Result<()> {
        if headers.len() != self.num_cols() {
            return Err(Error::ShapeMismatch {
                expected: self.num_cols(),
                found: headers.len(),
            });
        }
        for (slot, name) in self.headers.iter_mut().zip(headers) {
            name.as_ref().clone_into(slot);
        }
        Ok(())
    }

    /// Release the table and everything it owns
    pub fn destroy(self) {
        drop(self);
    }

    /// Column names in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a cell by row and column index
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.headers.len()
    }

    /// True if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Check that `col` addresses an existing column
    pub fn check_column(&self, col: usize) -> Result<()> {
        if col < self.num_cols() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: col,
                num_cols: self.num_cols(),
            })
        }
    }

    /// Values of one column in row order
    pub fn column_values(&self, col: usize) -> Result<Vec<&str>> {
        self.check_column(col)?;
        Ok(self.rows.iter().map(|r| r.cells[col].as_str()).collect())
    }

    pub(crate) fn push_row_unchecked(&mut self, cells: Vec<String>) -> Result<()> {
        debug_assert_eq!(cells.len(), self.num_cols());
        self.rows.try_reserve(1)?;
        self.rows.push(Row { cells });
        Ok(())
    }
}
