//! Extraction result.

use serde::{Deserialize, Serialize};

/// How the value column was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSource {
    /// A header cell contained the target year
    HeaderMatch,
    /// The fixed fallback column was used
    Fallback,
}

/// The extracted figure and where it was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Cell text as printed in the statement, trimmed
    pub value: String,

    /// Page the statement heading was found on (1-indexed)
    pub page: u32,

    /// Row count of the table the value came from
    pub row_count: usize,

    /// Column count of the table the value came from
    pub column_count: usize,

    /// Position of the table among the page's tables (0-indexed)
    pub table_index: usize,

    /// Row of the matched label (0-indexed)
    pub row_index: usize,

    /// Column the value was read from (0-indexed)
    pub column_index: usize,

    pub column_source: ColumnSource,

    /// Text of the label cell that matched
    pub label: String,
}

impl ExtractionResult {
    /// Interpret the value as a number.
    ///
    /// Thousands separators, currency symbols and codes are ignored;
    /// parentheses or a leading minus make the number negative.
    pub fn numeric_value(&self) -> Option<f64> {
        crate::extract::parse_amount(&self.value)
    }

    /// One-line location summary used in reports.
    pub fn debug_line(&self) -> String {
        format!(
            "page={}, table_extracted_rows={} cols={}",
            self.page, self.row_count, self.column_count
        )
    }
}
