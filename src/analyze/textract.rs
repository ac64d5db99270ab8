//! AWS Textract backend.

use super::{AnalyzerOptions, DocumentAnalyzer, FeatureType};
use crate::error::{Error, Result};
use crate::model::{
    AnalysisResponse, Block, BlockType, BoundingBox, DocumentMetadata, Geometry, Relationship,
    RelationshipType, SelectionStatus,
};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::operation::analyze_document::AnalyzeDocumentOutput;
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types as sdk;
use aws_sdk_textract::Client;
use tokio::runtime::Runtime;

/// Analyzer backed by a synchronous `AnalyzeDocument` call.
///
/// Credentials and region come from the ambient AWS configuration
/// (environment, shared config files or instance role) unless overridden.
/// The call is driven on a private current-thread runtime.
pub struct TextractAnalyzer {
    client: Client,
    runtime: Runtime,
}

impl TextractAnalyzer {
    /// Create an analyzer from the ambient configuration.
    pub fn new() -> Result<Self> {
        Self::with_options(&AnalyzerOptions::default())
    }

    /// Create an analyzer with region and profile overrides.
    pub fn with_options(options: &AnalyzerOptions) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(ref region) = options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(ref profile) = options.profile {
            loader = loader.profile_name(profile);
        }
        let config = runtime.block_on(loader.load());
        log::debug!(
            "textract client configured for region {}",
            config
                .region()
                .map(|r| r.as_ref().to_string())
                .unwrap_or_else(|| "<unset>".to_string())
        );

        Ok(Self {
            client: Client::new(&config),
            runtime,
        })
    }
}

impl DocumentAnalyzer for TextractAnalyzer {
    fn name(&self) -> &str {
        "textract"
    }

    fn analyze(&self, document: &[u8], features: &[FeatureType]) -> Result<AnalysisResponse> {
        let request = self
            .client
            .analyze_document()
            .document(
                sdk::Document::builder()
                    .bytes(Blob::new(document.to_vec()))
                    .build(),
            )
            .set_feature_types(Some(
                features
                    .iter()
                    .map(|f| sdk::FeatureType::from(f.as_str()))
                    .collect(),
            ));

        log::debug!(
            "submitting {} bytes for analysis ({:?})",
            document.len(),
            features
        );
        let output = self
            .runtime
            .block_on(request.send())
            .map_err(|e| Error::Service(DisplayErrorContext(&e).to_string()))?;

        let response = convert_output(output);
        log::debug!(
            "analysis returned {} blocks over {} page(s)",
            response.blocks.len(),
            response.page_count()
        );
        Ok(response)
    }
}

fn convert_output(output: AnalyzeDocumentOutput) -> AnalysisResponse {
    let pages = output
        .document_metadata
        .and_then(|m| m.pages)
        .and_then(to_u32)
        .unwrap_or(0);
    AnalysisResponse {
        document_metadata: DocumentMetadata { pages },
        blocks: output
            .blocks
            .unwrap_or_default()
            .into_iter()
            .map(convert_block)
            .collect(),
        analyze_document_model_version: output.analyze_document_model_version,
    }
}

fn convert_block(block: sdk::Block) -> Block {
    let block_type = block
        .block_type
        .as_ref()
        .map(|t| BlockType::from(t.as_str()))
        .unwrap_or_else(|| BlockType::Other(String::new()));

    Block {
        id: block.id.unwrap_or_default(),
        block_type,
        text: block.text,
        page: block.page.and_then(to_u32),
        row_index: block.row_index.and_then(to_u32),
        column_index: block.column_index.and_then(to_u32),
        row_span: block.row_span.and_then(to_u32),
        column_span: block.column_span.and_then(to_u32),
        confidence: block.confidence,
        geometry: block
            .geometry
            .and_then(|g| g.bounding_box)
            .map(|b| Geometry {
                bounding_box: BoundingBox {
                    width: b.width,
                    height: b.height,
                    left: b.left,
                    top: b.top,
                },
            }),
        selection_status: block.selection_status.and_then(|s| match s {
            sdk::SelectionStatus::Selected => Some(SelectionStatus::Selected),
            sdk::SelectionStatus::NotSelected => Some(SelectionStatus::NotSelected),
            _ => None,
        }),
        entity_types: block
            .entity_types
            .unwrap_or_default()
            .iter()
            .map(|e| e.as_str().to_string())
            .collect(),
        relationships: block
            .relationships
            .unwrap_or_default()
            .into_iter()
            .map(|r| Relationship {
                kind: r
                    .r#type
                    .as_ref()
                    .map(|t| RelationshipType::from(t.as_str()))
                    .unwrap_or_else(|| RelationshipType::Other(String::new())),
                ids: r.ids.unwrap_or_default(),
            })
            .collect(),
    }
}

fn to_u32(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}
