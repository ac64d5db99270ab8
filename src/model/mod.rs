//! Data model for document analysis output and extraction results.
//!
//! [`Block`] and [`AnalysisResponse`] mirror what the analysis service
//! returns. [`BlockIndex`] resolves block references by id. [`Table`] and
//! [`ExtractionResult`] are built fresh on every extraction run.

mod block;
mod index;
mod response;
mod result;
mod table;

pub use block::{
    Block, BlockType, BoundingBox, Geometry, Relationship, RelationshipType, SelectionStatus,
    COLUMN_HEADER,
};
pub use index::{BlockIndex, SELECTED_MARK};
pub use response::{AnalysisResponse, DocumentMetadata};
pub use result::{ColumnSource, ExtractionResult};
pub use table::Table;
