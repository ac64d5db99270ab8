//! Extraction options and configuration.

/// Heading that marks the income statement page.
pub const DEFAULT_HEADING: &str = "STATEMENT OF PROFIT OR LOSS";

/// Row label of the figure to extract.
pub const DEFAULT_LABEL: &str = "Revenue";

/// Value column used when no header matches the target year.
///
/// 0-indexed and counted from the label column, so `2` is the third
/// column of the grid (the second figure column).
pub const DEFAULT_FALLBACK_COLUMN: usize = 2;

/// Leading rows scanned for the target year.
pub const DEFAULT_HEADER_ROWS: usize = 2;

/// Options for locating and resolving the revenue figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Heading searched for when locating the statement page
    pub heading: String,

    /// Row label searched for in the page's tables
    pub label: String,

    /// Year whose column holds the value (e.g., "2024")
    pub target_year: Option<String>,

    /// Column used when the target year is absent or unmatched
    pub fallback_column: usize,

    /// Number of leading rows treated as the header
    pub header_rows: usize,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the statement heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Set the row label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the target year. Blank years are treated as absent.
    pub fn with_target_year(mut self, year: impl ToString) -> Self {
        let year = year.to_string();
        let year = year.trim();
        self.target_year = if year.is_empty() {
            None
        } else {
            Some(year.to_string())
        };
        self
    }

    /// Set the fallback column (0-indexed).
    pub fn with_fallback_column(mut self, column: usize) -> Self {
        self.fallback_column = column;
        self
    }

    /// Set the number of header rows scanned for the target year.
    pub fn with_header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            label: DEFAULT_LABEL.to_string(),
            target_year: None,
            fallback_column: DEFAULT_FALLBACK_COLUMN,
            header_rows: DEFAULT_HEADER_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.heading, "STATEMENT OF PROFIT OR LOSS");
        assert_eq!(options.label, "Revenue");
        assert_eq!(options.target_year, None);
        assert_eq!(options.fallback_column, 2);
        assert_eq!(options.header_rows, 2);
    }

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new()
            .with_heading("Income Statement")
            .with_label("Turnover")
            .with_target_year(2024)
            .with_fallback_column(1)
            .with_header_rows(1);

        assert_eq!(options.heading, "Income Statement");
        assert_eq!(options.label, "Turnover");
        assert_eq!(options.target_year, Some("2024".to_string()));
        assert_eq!(options.fallback_column, 1);
        assert_eq!(options.header_rows, 1);
    }

    #[test]
    fn test_blank_target_year_is_absent() {
        let options = ExtractOptions::new().with_target_year("  ");
        assert_eq!(options.target_year, None);
    }
}
