//! Blocks returned by document analysis.
//!
//! Field names follow the service's JSON (`BlockType`, `RowIndex`, ...)
//! so a saved `AnalyzeDocument` response round-trips through these types.

use serde::{Deserialize, Serialize};

/// Kind of a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    Page,
    Line,
    Word,
    Table,
    Cell,
    MergedCell,
    KeyValueSet,
    SelectionElement,
    TableTitle,
    TableFooter,
    /// Any block type this crate does not interpret
    Other(String),
}

impl BlockType {
    /// Wire name of the block type.
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Page => "PAGE",
            BlockType::Line => "LINE",
            BlockType::Word => "WORD",
            BlockType::Table => "TABLE",
            BlockType::Cell => "CELL",
            BlockType::MergedCell => "MERGED_CELL",
            BlockType::KeyValueSet => "KEY_VALUE_SET",
            BlockType::SelectionElement => "SELECTION_ELEMENT",
            BlockType::TableTitle => "TABLE_TITLE",
            BlockType::TableFooter => "TABLE_FOOTER",
            BlockType::Other(name) => name,
        }
    }
}

impl From<&str> for BlockType {
    fn from(name: &str) -> Self {
        match name {
            "PAGE" => BlockType::Page,
            "LINE" => BlockType::Line,
            "WORD" => BlockType::Word,
            "TABLE" => BlockType::Table,
            "CELL" => BlockType::Cell,
            "MERGED_CELL" => BlockType::MergedCell,
            "KEY_VALUE_SET" => BlockType::KeyValueSet,
            "SELECTION_ELEMENT" => BlockType::SelectionElement,
            "TABLE_TITLE" => BlockType::TableTitle,
            "TABLE_FOOTER" => BlockType::TableFooter,
            other => BlockType::Other(other.to_string()),
        }
    }
}

impl From<String> for BlockType {
    fn from(name: String) -> Self {
        BlockType::from(name.as_str())
    }
}

impl From<BlockType> for String {
    fn from(block_type: BlockType) -> Self {
        block_type.as_str().to_string()
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a relationship between blocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipType {
    Child,
    MergedCell,
    Value,
    Title,
    TableTitle,
    TableFooter,
    /// Any relationship type this crate does not interpret
    Other(String),
}

impl RelationshipType {
    /// Wire name of the relationship type.
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipType::Child => "CHILD",
            RelationshipType::MergedCell => "MERGED_CELL",
            RelationshipType::Value => "VALUE",
            RelationshipType::Title => "TITLE",
            RelationshipType::TableTitle => "TABLE_TITLE",
            RelationshipType::TableFooter => "TABLE_FOOTER",
            RelationshipType::Other(name) => name,
        }
    }
}

impl From<&str> for RelationshipType {
    fn from(name: &str) -> Self {
        match name {
            "CHILD" => RelationshipType::Child,
            "MERGED_CELL" => RelationshipType::MergedCell,
            "VALUE" => RelationshipType::Value,
            "TITLE" => RelationshipType::Title,
            "TABLE_TITLE" => RelationshipType::TableTitle,
            "TABLE_FOOTER" => RelationshipType::TableFooter,
            other => RelationshipType::Other(other.to_string()),
        }
    }
}

impl From<String> for RelationshipType {
    fn from(name: String) -> Self {
        RelationshipType::from(name.as_str())
    }
}

impl From<RelationshipType> for String {
    fn from(kind: RelationshipType) -> Self {
        kind.as_str().to_string()
    }
}

/// Ordered references from one block to others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relationship {
    /// Relationship kind
    #[serde(rename = "Type")]
    pub kind: RelationshipType,

    /// Target block ids, in document order
    #[serde(default)]
    pub ids: Vec<String>,
}

impl Relationship {
    /// Create a CHILD relationship.
    pub fn children<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind: RelationshipType::Child,
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Axis-aligned bounding box in page-relative coordinates (0..1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl BoundingBox {
    /// Vertical centre of the box.
    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Block geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Geometry {
    #[serde(default)]
    pub bounding_box: BoundingBox,
}

/// Selection state of a checkbox or radio element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStatus {
    Selected,
    NotSelected,
}

/// A unit of document analysis output (page, line, word, table, cell, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    /// Opaque identifier, unique within a response
    pub id: String,

    /// Block kind
    pub block_type: BlockType,

    /// Recognised text (WORD and LINE blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Page number (1-indexed); absent in single-page responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Row of a CELL within its TABLE (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,

    /// Column of a CELL within its TABLE (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_span: Option<u32>,

    /// Recognition confidence (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_status: Option<SelectionStatus>,

    /// Semantic tags such as `COLUMN_HEADER` on cells
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

/// Entity type the service attaches to table header cells.
pub const COLUMN_HEADER: &str = "COLUMN_HEADER";

impl Block {
    /// Create a block with only an id and a type.
    pub fn new(id: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            id: id.into(),
            block_type,
            text: None,
            page: None,
            row_index: None,
            column_index: None,
            row_span: None,
            column_span: None,
            confidence: None,
            geometry: None,
            selection_status: None,
            entity_types: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Create a WORD block.
    pub fn word(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, BlockType::Word).with_text(text)
    }

    /// Create a CELL block at a 1-indexed grid position.
    pub fn cell(id: impl Into<String>, row: u32, column: u32) -> Self {
        let mut block = Self::new(id, BlockType::Cell);
        block.row_index = Some(row);
        block.column_index = Some(column);
        block
    }

    /// Set text and return self.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set page and return self.
    pub fn on_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Append a CHILD relationship and return self.
    pub fn with_children<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.relationships.push(Relationship::children(ids));
        self
    }

    /// Set bounding box and return self.
    pub fn with_bounding_box(mut self, left: f32, top: f32, width: f32, height: f32) -> Self {
        self.geometry = Some(Geometry {
            bounding_box: BoundingBox {
                width,
                height,
                left,
                top,
            },
        });
        self
    }

    /// Add an entity type and return self.
    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_types.push(entity_type.into());
        self
    }

    /// Set selection status and return self.
    pub fn with_selection(mut self, status: SelectionStatus) -> Self {
        self.selection_status = Some(status);
        self
    }

    /// Page this block belongs to; blocks without a page are on page 1.
    pub fn page_number(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Check the block type.
    pub fn is(&self, block_type: &BlockType) -> bool {
        &self.block_type == block_type
    }

    /// Ids of CHILD relationships, in order.
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .iter()
            .filter(|rel| rel.kind == RelationshipType::Child)
            .flat_map(|rel| rel.ids.iter().map(String::as_str))
    }

    /// Bounding box, if the block carries geometry.
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.geometry.as_ref().map(|g| &g.bounding_box)
    }

    /// Whether the service tagged this cell as a column header.
    pub fn is_column_header(&self) -> bool {
        self.entity_types.iter().any(|e| e == COLUMN_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_from_service_json() {
        let json = r#"{
            "BlockType": "CELL",
            "Id": "c-1",
            "Page": 3,
            "RowIndex": 2,
            "ColumnIndex": 1,
            "RowSpan": 1,
            "ColumnSpan": 1,
            "Confidence": 98.5,
            "EntityTypes": ["COLUMN_HEADER"],
            "Geometry": {
                "BoundingBox": {"Width": 0.1, "Height": 0.02, "Left": 0.05, "Top": 0.3},
                "Polygon": [{"X": 0.05, "Y": 0.3}]
            },
            "Relationships": [{"Type": "CHILD", "Ids": ["w-1", "w-2"]}]
        }"#;

        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Cell);
        assert_eq!(block.page_number(), 3);
        assert_eq!(block.row_index, Some(2));
        assert!(block.is_column_header());
        assert_eq!(block.child_ids().collect::<Vec<_>>(), vec!["w-1", "w-2"]);
        assert_eq!(block.bounding_box().unwrap().left, 0.05);
    }

    #[test]
    fn test_unknown_types_preserved() {
        let json = r#"{"BlockType": "LAYOUT_TEXT", "Id": "l-1",
            "Relationships": [{"Type": "ANSWER", "Ids": []}]}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Other("LAYOUT_TEXT".to_string()));
        assert_eq!(block.child_ids().count(), 0);

        let out = serde_json::to_string(&block).unwrap();
        assert!(out.contains("\"LAYOUT_TEXT\""));
        assert!(out.contains("\"ANSWER\""));
    }

    #[test]
    fn test_missing_page_defaults_to_first() {
        let block = Block::word("w-1", "Revenue");
        assert_eq!(block.page_number(), 1);
        assert_eq!(block.on_page(4).page_number(), 4);
    }

    #[test]
    fn test_child_ids_ignore_other_relationships() {
        let mut block = Block::cell("c-1", 1, 1).with_children(["w-1"]);
        block.relationships.push(Relationship {
            kind: RelationshipType::MergedCell,
            ids: vec!["m-1".to_string()],
        });
        assert_eq!(block.child_ids().collect::<Vec<_>>(), vec!["w-1"]);
    }
}
