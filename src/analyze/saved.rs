//! Replay of analysis responses saved as JSON.

use super::{DocumentAnalyzer, FeatureType};
use crate::error::Result;
use crate::model::AnalysisResponse;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Analyzer that reads a saved `AnalyzeDocument` response instead of
/// calling the service. The document bytes are ignored.
#[derive(Debug, Clone)]
pub struct SavedResponseAnalyzer {
    path: PathBuf,
}

impl SavedResponseAnalyzer {
    /// Create an analyzer reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the saved response.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentAnalyzer for SavedResponseAnalyzer {
    fn name(&self) -> &str {
        "saved-response"
    }

    fn analyze(&self, _document: &[u8], features: &[FeatureType]) -> Result<AnalysisResponse> {
        log::debug!(
            "loading saved response {} (requested features ignored: {:?})",
            self.path.display(),
            features
        );
        let file = File::open(&self.path)?;
        let response = AnalysisResponse::from_reader(BufReader::new(file))?;
        log::debug!("loaded {} blocks", response.blocks.len());
        Ok(response)
    }
}
