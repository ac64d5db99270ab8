//! Id-indexed view over a block collection.

use super::{Block, BlockType, SelectionStatus};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Marker text for a selected checkbox inside a cell or line.
pub const SELECTED_MARK: &str = "[X]";

/// Lookup from block id to block, built once per response.
///
/// Blocks reference each other by id only, so the index stores positions
/// into the borrowed slice rather than links between blocks.
#[derive(Debug, Clone)]
pub struct BlockIndex<'a> {
    blocks: &'a [Block],
    by_id: HashMap<&'a str, usize>,
}

impl<'a> BlockIndex<'a> {
    /// Index a block collection. Duplicate ids keep their first block.
    pub fn new(blocks: &'a [Block]) -> Self {
        let mut by_id = HashMap::with_capacity(blocks.len());
        for (position, block) in blocks.iter().enumerate() {
            match by_id.entry(block.id.as_str()) {
                Entry::Occupied(_) => {
                    log::warn!("duplicate block id {}, keeping first occurrence", block.id)
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }
        Self { blocks, by_id }
    }

    /// All blocks in document order.
    pub fn blocks(&self) -> &'a [Block] {
        self.blocks
    }

    /// Number of indexed blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Look up a block by id.
    pub fn get(&self, id: &str) -> Option<&'a Block> {
        self.by_id.get(id).map(|&position| &self.blocks[position])
    }

    /// CHILD blocks of `block`, in relationship order. Dangling ids are skipped.
    pub fn children(&self, block: &'a Block) -> impl Iterator<Item = &'a Block> + '_ {
        block.child_ids().filter_map(move |id| {
            let child = self.get(id);
            if child.is_none() {
                log::trace!("block {} references missing child {}", block.id, id);
            }
            child
        })
    }

    /// Blocks of one type, in document order.
    pub fn of_type(&self, block_type: BlockType) -> impl Iterator<Item = &'a Block> + 'a {
        self.blocks.iter().filter(move |b| b.block_type == block_type)
    }

    /// Text of a block.
    ///
    /// WORD blocks yield their own text. Other blocks join the text of
    /// their WORD and SELECTION_ELEMENT children with single spaces; a
    /// TABLE joins the text of its cells. Blocks without children fall
    /// back to their own text.
    pub fn text_of(&self, block: &'a Block) -> String {
        match block.block_type {
            BlockType::Word => block.text.as_deref().unwrap_or("").trim().to_string(),
            BlockType::SelectionElement => selection_text(block).to_string(),
            BlockType::Table => join_fragments(
                self.children(block)
                    .filter(|child| child.is(&BlockType::Cell))
                    .map(|cell| self.leaf_text(cell)),
            ),
            _ => {
                if block.child_ids().next().is_none() {
                    return block.text.as_deref().unwrap_or("").trim().to_string();
                }
                self.leaf_text(block)
            }
        }
    }

    fn leaf_text(&self, block: &'a Block) -> String {
        join_fragments(self.children(block).map(|child| match child.block_type {
            BlockType::Word => child.text.as_deref().unwrap_or("").trim().to_string(),
            BlockType::SelectionElement => selection_text(child).to_string(),
            _ => String::new(),
        }))
    }
}

fn selection_text(block: &Block) -> &'static str {
    match block.selection_status {
        Some(SelectionStatus::Selected) => SELECTED_MARK,
        _ => "",
    }
}

fn join_fragments(fragments: impl Iterator<Item = String>) -> String {
    fragments
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Block> {
        vec![
            Block::new("p-1", BlockType::Page).on_page(1),
            Block::new("l-1", BlockType::Line)
                .on_page(1)
                .with_text("ignored when children exist")
                .with_children(["w-1", "w-2"]),
            Block::word("w-1", " Total ").on_page(1),
            Block::word("w-2", "Revenue").on_page(1),
            Block::new("t-1", BlockType::Table)
                .on_page(2)
                .with_children(["c-1", "c-2"]),
            Block::cell("c-1", 1, 1).on_page(2).with_children(["w-3", "s-1"]),
            Block::cell("c-2", 1, 2).on_page(2),
            Block::word("w-3", "Audited").on_page(2),
            Block::new("s-1", BlockType::SelectionElement)
                .on_page(2)
                .with_selection(SelectionStatus::Selected),
        ]
    }

    #[test]
    fn test_lookup_and_children() {
        let blocks = sample();
        let index = BlockIndex::new(&blocks);
        assert_eq!(index.len(), 9);
        assert_eq!(index.get("w-2").unwrap().text.as_deref(), Some("Revenue"));
        assert!(index.get("nope").is_none());

        let line = index.get("l-1").unwrap();
        let ids: Vec<&str> = index.children(line).map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["w-1", "w-2"]);
    }

    #[test]
    fn test_text_of_line_joins_words() {
        let blocks = sample();
        let index = BlockIndex::new(&blocks);
        assert_eq!(index.text_of(index.get("l-1").unwrap()), "Total Revenue");
    }

    #[test]
    fn test_text_of_cell_and_table() {
        let blocks = sample();
        let index = BlockIndex::new(&blocks);
        assert_eq!(index.text_of(index.get("c-1").unwrap()), "Audited [X]");
        assert_eq!(index.text_of(index.get("c-2").unwrap()), "");
        assert_eq!(index.text_of(index.get("t-1").unwrap()), "Audited [X]");
    }

    #[test]
    fn test_dangling_child_skipped() {
        let blocks = vec![
            Block::new("l-1", BlockType::Line).with_children(["gone", "w-1"]),
            Block::word("w-1", "Revenue"),
        ];
        let index = BlockIndex::new(&blocks);
        assert_eq!(index.text_of(&blocks[0]), "Revenue");
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let blocks = vec![Block::word("w-1", "first"), Block::word("w-1", "second")];
        let index = BlockIndex::new(&blocks);
        assert_eq!(index.get("w-1").unwrap().text.as_deref(), Some("first"));
    }

    #[test]
    fn test_of_type() {
        let blocks = sample();
        let index = BlockIndex::new(&blocks);
        assert_eq!(index.of_type(BlockType::Cell).count(), 2);
    }
}
