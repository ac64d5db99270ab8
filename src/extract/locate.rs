//! Statement page location.

use super::text::{contains_normalized, normalize};
use crate::error::{Error, Result};
use crate::model::{Block, BlockIndex, BlockType};
use std::collections::{BTreeMap, HashSet};

/// Text lines of the document as `(page, text)` pairs.
///
/// LINE, CELL and TABLE blocks are yielded in document order. WORD blocks
/// that no LINE owns are grouped into lines by vertical position and
/// appended after them.
pub fn page_lines<'a>(index: &'a BlockIndex<'a>) -> impl Iterator<Item = (u32, String)> + 'a {
    let structured = index
        .blocks()
        .iter()
        .filter(|b| matches!(b.block_type, BlockType::Line | BlockType::Cell | BlockType::Table))
        .map(move |b| (b.page_number(), index.text_of(b)));

    structured
        .chain(orphan_word_lines(index))
        .filter(|(_, text)| !text.is_empty())
}

/// Find the first page whose text contains `heading`.
///
/// Comparison is case-insensitive on normalised text. Every line is first
/// collected by page, since blocks are not ordered by page, and the lines
/// of a page are joined before matching, so a heading wrapped over two
/// lines is found. Pages are then checked in ascending order.
pub fn find_heading_page(index: &BlockIndex<'_>, heading: &str) -> Result<u32> {
    let mut pages: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for (page, line) in page_lines(index) {
        pages.entry(page).or_default().push(line);
    }

    let wanted = normalize(heading);
    for (page, lines) in &pages {
        if contains_normalized(&lines.join(" "), &wanted) {
            log::debug!("heading '{}' found on page {}", heading, page);
            return Ok(*page);
        }
    }

    log::debug!(
        "heading '{}' not found in {} page(s)",
        heading,
        pages.len()
    );
    Err(Error::HeadingNotFound {
        heading: heading.to_string(),
    })
}

fn orphan_word_lines(index: &BlockIndex<'_>) -> Vec<(u32, String)> {
    let owned: HashSet<&str> = index
        .of_type(BlockType::Line)
        .flat_map(|line| line.child_ids())
        .collect();

    let mut by_page: BTreeMap<u32, Vec<&Block>> = BTreeMap::new();
    for word in index.of_type(BlockType::Word) {
        if !owned.contains(word.id.as_str()) {
            by_page.entry(word.page_number()).or_default().push(word);
        }
    }

    let mut lines = Vec::new();
    for (page, words) in by_page {
        for line in group_into_lines(words) {
            let text = line
                .iter()
                .filter_map(|w| w.text.as_deref())
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            lines.push((page, text));
        }
    }
    lines
}

/// Group words whose vertical centres lie within half a word height.
///
/// Words without geometry form a single trailing line in document order.
fn group_into_lines(words: Vec<&Block>) -> Vec<Vec<&Block>> {
    let (mut placed, unplaced): (Vec<&Block>, Vec<&Block>) =
        words.into_iter().partition(|w| w.bounding_box().is_some());

    placed.sort_by(|a, b| center_y(a).total_cmp(&center_y(b)));

    let mut lines: Vec<Vec<&Block>> = Vec::new();
    let mut current: Vec<&Block> = Vec::new();
    let mut line_center = 0.0_f32;
    let mut line_height = 0.0_f32;

    for word in placed {
        let (y, h) = (center_y(word), height(word));
        let tolerance = line_height.max(h) / 2.0;
        if !current.is_empty() && (y - line_center).abs() > tolerance {
            lines.push(std::mem::take(&mut current));
        }
        if current.is_empty() {
            line_center = y;
            line_height = h;
        }
        current.push(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    for line in &mut lines {
        line.sort_by(|a, b| left(a).total_cmp(&left(b)));
    }
    if !unplaced.is_empty() {
        lines.push(unplaced);
    }
    lines
}

fn center_y(block: &Block) -> f32 {
    block.bounding_box().map(|b| b.center_y()).unwrap_or(0.0)
}

fn height(block: &Block) -> f32 {
    block.bounding_box().map(|b| b.height).unwrap_or(0.0)
}

fn left(block: &Block) -> f32 {
    block.bounding_box().map(|b| b.left).unwrap_or(0.0)
}
