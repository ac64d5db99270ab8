//! Document analysis backends.
//!
//! A [`DocumentAnalyzer`] turns document bytes into an
//! [`AnalysisResponse`]. [`TextractAnalyzer`] calls the AWS service;
//! [`SavedResponseAnalyzer`] replays a response saved to disk.
//!
//! # Example
//!
//! ```no_run
//! use finrev::analyze::{DocumentAnalyzer, SavedResponseAnalyzer, DEFAULT_FEATURES};
//!
//! fn main() -> finrev::Result<()> {
//!     let analyzer = SavedResponseAnalyzer::new("response.json");
//!     let response = analyzer.analyze(&[], DEFAULT_FEATURES)?;
//!     println!("{} blocks", response.blocks.len());
//!     Ok(())
//! }
//! ```

mod saved;
#[cfg(feature = "textract")]
mod textract;

pub use saved::SavedResponseAnalyzer;
#[cfg(feature = "textract")]
pub use textract::TextractAnalyzer;

use crate::error::Result;
use crate::model::AnalysisResponse;

/// Analysis features that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureType {
    /// Table and cell detection
    Tables,
    /// Key-value pair detection
    Forms,
    /// Signature detection
    Signatures,
    /// Layout element detection
    Layout,
}

impl FeatureType {
    /// Wire name of the feature.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Tables => "TABLES",
            FeatureType::Forms => "FORMS",
            FeatureType::Signatures => "SIGNATURES",
            FeatureType::Layout => "LAYOUT",
        }
    }
}

/// Features requested for revenue extraction.
pub const DEFAULT_FEATURES: &[FeatureType] = &[FeatureType::Tables, FeatureType::Forms];

/// Connection options for service-backed analyzers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Region override; the ambient configuration is used when unset
    pub region: Option<String>,

    /// Named credentials profile
    pub profile: Option<String>,
}

impl AnalyzerOptions {
    /// Create new analyzer options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the credentials profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

/// Trait for document analysis backends.
///
/// Implementations perform a single call and do not retry.
pub trait DocumentAnalyzer: Send + Sync {
    /// Get the name of this analyzer.
    fn name(&self) -> &str;

    /// Analyze a document and return its blocks.
    fn analyze(&self, document: &[u8], features: &[FeatureType]) -> Result<AnalysisResponse>;
}
