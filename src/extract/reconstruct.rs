//! Table reconstruction from TABLE/CELL blocks.

use crate::model::{Block, BlockIndex, BlockType, Table};
use std::collections::HashSet;

/// Largest row or column position accepted from a CELL block.
pub const MAX_TABLE_DIMENSION: usize = 1000;

/// Rebuild every table on `page`, in the order the TABLE blocks appear.
pub fn tables_on_page(index: &BlockIndex<'_>, page: u32) -> Vec<Table> {
    let tables: Vec<Table> = index
        .of_type(BlockType::Table)
        .filter(|t| t.page_number() == page)
        .map(|t| build_table(index, t))
        .collect();
    log::debug!("reconstructed {} table(s) on page {}", tables.len(), page);
    tables
}

/// Rebuild one table as a rectangular grid.
///
/// The service numbers rows and columns from 1; the grid is 0-indexed.
/// A merged cell keeps its text in its top-left position and positions
/// without a cell stay empty. Cells positioned beyond
/// [`MAX_TABLE_DIMENSION`] are dropped.
pub fn build_table<'a>(index: &BlockIndex<'a>, table: &'a Block) -> Table {
    let cells: Vec<(usize, usize, &Block)> = index
        .children(table)
        .filter(|child| child.is(&BlockType::Cell))
        .filter_map(|cell| match (cell.row_index, cell.column_index) {
            (Some(row), Some(column))
                if (1..=MAX_TABLE_DIMENSION).contains(&(row as usize))
                    && (1..=MAX_TABLE_DIMENSION).contains(&(column as usize)) =>
            {
                Some((row as usize - 1, column as usize - 1, cell))
            }
            (Some(row), Some(column)) if row > 0 && column > 0 => {
                log::warn!(
                    "cell {} in table {} at row {} column {} is outside the {}x{} limit",
                    cell.id,
                    table.id,
                    row,
                    column,
                    MAX_TABLE_DIMENSION,
                    MAX_TABLE_DIMENSION
                );
                None
            }
            _ => {
                log::warn!("cell {} in table {} has no valid position", cell.id, table.id);
                None
            }
        })
        .collect();

    let row_count = cells.iter().map(|(r, _, _)| r + 1).max().unwrap_or(0);
    let column_count = cells.iter().map(|(_, c, _)| c + 1).max().unwrap_or(0);

    let mut grid = Table::with_size(row_count, column_count).on_page(table.page_number());
    grid.source_id = Some(table.id.clone());

    let mut filled: HashSet<(usize, usize)> = HashSet::with_capacity(cells.len());
    let mut header_rows: HashSet<usize> = HashSet::new();
    for (row, column, cell) in cells {
        if !filled.insert((row, column)) {
            log::warn!(
                "table {} has more than one cell at row {} column {}, keeping the first",
                table.id,
                row + 1,
                column + 1
            );
            continue;
        }
        if cell.is_column_header() {
            header_rows.insert(row);
        }
        let text = index.text_of(cell);
        if !text.is_empty() {
            grid.set_cell(row, column, text);
        }
    }

    grid.header_rows = (0..row_count).take_while(|r| header_rows.contains(r)).count();
    log::trace!(
        "table {}: {} rows x {} columns, {} header row(s)",
        table.id,
        grid.row_count(),
        grid.column_count(),
        grid.header_rows
    );
    grid
}
