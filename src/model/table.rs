//! Reconstructed table grids.

use serde::{Deserialize, Serialize};

/// A rectangular grid of cell text.
///
/// Rows and columns are 0-indexed. Every row has the same number of
/// columns; positions without a detected cell hold an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Cell text by row, then column
    pub rows: Vec<Vec<String>>,

    /// Number of leading rows tagged as column headers (0 = unknown)
    pub header_rows: usize,

    /// Page the table was found on (1-indexed, 0 = unknown)
    pub page: u32,

    /// Id of the TABLE block this grid was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid of empty cells.
    pub fn with_size(row_count: usize, column_count: usize) -> Self {
        Self {
            rows: vec![vec![String::new(); column_count]; row_count],
            ..Self::new()
        }
    }

    /// Create a table from text rows, padding short rows with empty cells.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self {
            rows,
            ..Self::new()
        }
    }

    /// Set the page and return self.
    pub fn on_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Check if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    /// Text at a grid position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Replace the text at a grid position. Returns false if out of range.
    pub fn set_cell(&mut self, row: usize, column: usize, text: impl Into<String>) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Get a row by index.
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Check that all rows have the same width.
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|row| row.len() == width)
    }
}
