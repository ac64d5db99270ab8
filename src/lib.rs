//! # finrev
//!
//! Extract the Revenue figure from a financial statement PDF.
//!
//! A document-analysis service (AWS Textract) turns the document into
//! blocks: pages, lines, words, tables and cells. This library then finds
//! the page carrying the "STATEMENT OF PROFIT OR LOSS" heading, rebuilds
//! the tables on that page and reads the value on the "Revenue" row, in
//! the column headed by the target year or in a fixed fallback column.
//!
//! ## Quick Start
//!
//! ```no_run
//! use finrev::analyze::TextractAnalyzer;
//! use finrev::RevenueExtractor;
//!
//! fn main() -> finrev::Result<()> {
//!     let analyzer = TextractAnalyzer::new()?;
//!     let result = RevenueExtractor::new()
//!         .with_target_year("2024")
//!         .extract_file(&analyzer, "statement.pdf")?;
//!     println!("Revenue: {}", result.value);
//!     Ok(())
//! }
//! ```
//!
//! ## Offline runs
//!
//! A response saved with [`RevenueExtractor::save_response_to`] can be
//! replayed through [`analyze::SavedResponseAnalyzer`] or
//! [`extract_from_saved_response`] without calling the service.

pub mod analyze;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analyze::{
    AnalyzerOptions, DocumentAnalyzer, FeatureType, SavedResponseAnalyzer, DEFAULT_FEATURES,
};
#[cfg(feature = "textract")]
pub use analyze::TextractAnalyzer;
pub use detect::{detect_format_from_bytes, detect_format_from_path, DocumentFormat};
pub use error::{Error, Result};
pub use extract::{extract_from_response, ExtractOptions};
pub use model::{
    AnalysisResponse, Block, BlockIndex, BlockType, ColumnSource, ExtractionResult, Table,
};
pub use render::{JsonFormat, ReportFormat};

use std::path::{Path, PathBuf};

/// Stages of the extraction pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading, validating and analysing the document
    Submitting,
    /// Finding the statement page
    LocatingPage,
    /// Rebuilding the page's tables
    ReconstructingTables,
    /// Reading the labelled value
    ResolvingRevenue,
    /// Writing the report
    Reporting,
}

impl Stage {
    /// Short human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Submitting => "submitting",
            Stage::LocatingPage => "locating page",
            Stage::ReconstructingTables => "reconstructing tables",
            Stage::ResolvingRevenue => "resolving revenue",
            Stage::Reporting => "reporting",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the revenue figure from a saved analysis response.
///
/// # Example
///
/// ```no_run
/// use finrev::{extract_from_saved_response, ExtractOptions};
///
/// let options = ExtractOptions::new().with_target_year("2024");
/// let result = extract_from_saved_response("response.json", &options).unwrap();
/// println!("{}", result.value);
/// ```
pub fn extract_from_saved_response<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    let response = SavedResponseAnalyzer::new(path.as_ref()).analyze(&[], DEFAULT_FEATURES)?;
    extract_from_response(&response, options)
}

/// Analyse a PDF with Textract and extract its revenue figure.
///
/// Uses the ambient AWS configuration and default options apart from the
/// target year.
#[cfg(feature = "textract")]
pub fn extract_revenue<P: AsRef<Path>>(
    path: P,
    target_year: Option<&str>,
) -> Result<ExtractionResult> {
    let analyzer = TextractAnalyzer::new()?;
    let mut extractor = RevenueExtractor::new();
    if let Some(year) = target_year {
        extractor = extractor.with_target_year(year);
    }
    extractor.extract_file(&analyzer, path)
}

/// Builder that runs a document through analysis and extraction.
///
/// # Example
///
/// ```no_run
/// use finrev::{RevenueExtractor, SavedResponseAnalyzer};
///
/// let analyzer = SavedResponseAnalyzer::new("response.json");
/// let result = RevenueExtractor::new()
///     .with_label("Turnover")
///     .with_fallback_column(1)
///     .extract_bytes(&analyzer, b"%PDF-1.7\n")?;
/// # Ok::<(), finrev::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RevenueExtractor {
    options: ExtractOptions,
    features: Vec<FeatureType>,
    save_response: Option<PathBuf>,
}

impl RevenueExtractor {
    /// Create a new extractor with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
            features: DEFAULT_FEATURES.to_vec(),
            save_response: None,
        }
    }

    /// Replace all extraction options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the target year.
    pub fn with_target_year(mut self, year: impl ToString) -> Self {
        self.options = self.options.with_target_year(year);
        self
    }

    /// Set the statement heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.options = self.options.with_heading(heading);
        self
    }

    /// Set the row label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.options = self.options.with_label(label);
        self
    }

    /// Set the fallback column (0-indexed).
    pub fn with_fallback_column(mut self, column: usize) -> Self {
        self.options = self.options.with_fallback_column(column);
        self
    }

    /// Set the number of header rows scanned for the target year.
    pub fn with_header_rows(mut self, rows: usize) -> Self {
        self.options = self.options.with_header_rows(rows);
        self
    }

    /// Set the analysis features to request.
    pub fn with_features(mut self, features: &[FeatureType]) -> Self {
        self.features = features.to_vec();
        self
    }

    /// Write the raw analysis response to `path` as JSON.
    pub fn save_response_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_response = Some(path.into());
        self
    }

    /// Get the extraction options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Read, validate and analyse a document file, then extract from it.
    pub fn extract_file<P: AsRef<Path>>(
        &self,
        analyzer: &dyn DocumentAnalyzer,
        path: P,
    ) -> Result<ExtractionResult> {
        let data = detect::read_document(path)?;
        self.extract_bytes(analyzer, &data)
    }

    /// Validate and analyse document bytes, then extract from them.
    pub fn extract_bytes(
        &self,
        analyzer: &dyn DocumentAnalyzer,
        data: &[u8],
    ) -> Result<ExtractionResult> {
        let format = detect::validate_document(data)?;
        log::debug!(
            "{}: {} ({} bytes) via {}",
            Stage::Submitting,
            format,
            data.len(),
            analyzer.name()
        );

        let response = analyzer.analyze(data, &self.features)?;
        if response.is_empty() {
            return Err(Error::EmptyResponse);
        }
        if let Some(ref path) = self.save_response {
            std::fs::write(path, response.to_json(true)?)?;
            log::info!("saved analysis response to {}", path.display());
        }
        self.extract_response(&response)
    }

    /// Extract from an already analysed response.
    pub fn extract_response(&self, response: &AnalysisResponse) -> Result<ExtractionResult> {
        extract_from_response(response, &self.options)
    }
}

impl Default for RevenueExtractor {
    fn default() -> Self {
        Self::new()
    }
}
