//! Raw document analysis response.

use super::Block;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Document-level metadata reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentMetadata {
    /// Number of pages analysed
    #[serde(default)]
    pub pages: u32,
}

/// Flat block collection returned by one analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisResponse {
    #[serde(default)]
    pub document_metadata: DocumentMetadata,

    #[serde(default)]
    pub blocks: Vec<Block>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyze_document_model_version: Option<String>,
}

impl AnalysisResponse {
    /// Wrap a block collection, deriving the page count from the blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let pages = blocks.iter().map(Block::page_number).max().unwrap_or(0);
        Self {
            document_metadata: DocumentMetadata { pages },
            blocks,
            analyze_document_model_version: None,
        }
    }

    /// Decode a saved response from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a saved response from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Encode the response as JSON in the service's field layout.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }

    /// Number of pages, from metadata or the highest block page.
    pub fn page_count(&self) -> u32 {
        let from_blocks = self.blocks.iter().map(Block::page_number).max().unwrap_or(0);
        self.document_metadata.pages.max(from_blocks)
    }

    /// Whether the response carries no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
