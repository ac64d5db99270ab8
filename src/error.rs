//! Error types for finrev library.

use std::io;
use thiserror::Error;

use crate::Stage;

/// Result type alias for finrev operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting a revenue figure.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a document format the analysis service accepts.
    #[error("Unknown file format: expected PDF, PNG, JPEG or TIFF")]
    UnknownFormat,

    /// The document exceeds the synchronous analysis size limit.
    #[error("Document is {size} bytes, synchronous analysis accepts at most {limit} bytes")]
    DocumentTooLarge {
        /// Size of the rejected document
        size: usize,
        /// Maximum accepted size
        limit: usize,
    },

    /// The analysis service call failed or was rejected.
    #[error("Document analysis service error: {0}")]
    Service(String),

    /// The analysis service returned no blocks.
    #[error("No blocks returned by document analysis")]
    EmptyResponse,

    /// A saved analysis response could not be decoded.
    #[error("Invalid analysis response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// No page contains the statement heading.
    #[error("Could not find page containing '{heading}'")]
    HeadingNotFound {
        /// Heading that was searched for
        heading: String,
    },

    /// The located page has no tables.
    #[error("No tables found on page {page}")]
    NoTablesOnPage {
        /// Page that was searched
        page: u32,
    },

    /// No table on the located page has a matching row with a value.
    #[error("'{label}' not found in tables on page {page}")]
    RevenueNotFound {
        /// Row label that was searched for
        label: String,
        /// Page that was searched
        page: u32,
    },

    /// Error while rendering a report.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Pipeline stage this error aborts.
    pub fn stage(&self) -> Stage {
        match self {
            Error::Io(_)
            | Error::UnknownFormat
            | Error::DocumentTooLarge { .. }
            | Error::Service(_)
            | Error::EmptyResponse
            | Error::InvalidResponse(_) => Stage::Submitting,
            Error::HeadingNotFound { .. } => Stage::LocatingPage,
            Error::NoTablesOnPage { .. } => Stage::ReconstructingTables,
            Error::RevenueNotFound { .. } => Stage::ResolvingRevenue,
            Error::Render(_) => Stage::Reporting,
        }
    }

    /// Whether the document was analysed but the wanted content is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::HeadingNotFound { .. }
                | Error::NoTablesOnPage { .. }
                | Error::RevenueNotFound { .. }
        )
    }

    /// Whether the analysis service failed or returned nothing usable.
    pub fn is_service(&self) -> bool {
        matches!(self, Error::Service(_) | Error::EmptyResponse)
    }
}
