//! Revenue row and value column resolution.

use super::options::ExtractOptions;
use super::text::{contains_normalized, normalize};
use crate::error::{Error, Result};
use crate::model::{ColumnSource, ExtractionResult, Table};

/// Find the labelled row and read its value from the first table that has one.
///
/// Tables are tried in order. Within a table the first row whose first
/// non-empty cell contains the label is used. A table whose value cell is
/// missing or blank is skipped in favour of the next one.
pub fn resolve(tables: &[Table], page: u32, options: &ExtractOptions) -> Result<ExtractionResult> {
    if tables.is_empty() {
        return Err(Error::NoTablesOnPage { page });
    }

    for (table_index, table) in tables.iter().enumerate() {
        if table.is_empty() {
            continue;
        }
        let Some(row_index) = find_label_row(table, &options.label) else {
            log::trace!("table {}: no '{}' row", table_index, options.label);
            continue;
        };
        let (column_index, column_source) = select_column(table, row_index, options);

        let value = table
            .cell(row_index, column_index)
            .map(str::trim)
            .unwrap_or("");
        if value.is_empty() {
            log::debug!(
                "table {}: '{}' row {} has no value in column {}, trying next table",
                table_index,
                options.label,
                row_index,
                column_index
            );
            continue;
        }

        log::debug!(
            "table {}: '{}' at row {} column {} ({:?})",
            table_index,
            options.label,
            row_index,
            column_index,
            column_source
        );
        return Ok(ExtractionResult {
            value: value.to_string(),
            page,
            row_count: table.row_count(),
            column_count: table.column_count(),
            table_index,
            row_index,
            column_index,
            column_source,
            label: first_non_empty(table.row(row_index).unwrap_or(&[]))
                .unwrap_or("")
                .to_string(),
        });
    }

    Err(Error::RevenueNotFound {
        label: options.label.clone(),
        page,
    })
}

/// Index of the first row whose first non-empty cell contains `label`.
pub fn find_label_row(table: &Table, label: &str) -> Option<usize> {
    let wanted = normalize(label);
    table.rows.iter().position(|row| {
        first_non_empty(row)
            .map(|cell| contains_normalized(cell, &wanted))
            .unwrap_or(false)
    })
}

/// Column whose header cell contains `year`.
///
/// Scans the first `header_rows` rows, stopping before `before_row`, in
/// row-then-column order. Only columns after `label_column` are candidates,
/// so a caption such as "Year ended 30 June 2024" never selects the label.
pub fn find_year_column(
    table: &Table,
    year: &str,
    header_rows: usize,
    before_row: usize,
    label_column: usize,
) -> Option<usize> {
    let wanted = normalize(year);
    table
        .rows
        .iter()
        .take(header_rows.min(before_row))
        .find_map(|row| {
            row.iter()
                .enumerate()
                .skip(label_column + 1)
                .find(|(_, cell)| contains_normalized(cell, &wanted))
                .map(|(column, _)| column)
        })
}

/// Pick the value column for the row at `row_index`.
///
/// The target year's header column wins when there is one; otherwise the
/// fallback column is used regardless of table content.
pub fn select_column(
    table: &Table,
    row_index: usize,
    options: &ExtractOptions,
) -> (usize, ColumnSource) {
    let header_rows = options.header_rows.max(table.header_rows);
    let label_column = table
        .row(row_index)
        .and_then(|row| row.iter().position(|cell| !cell.trim().is_empty()))
        .unwrap_or(0);
    options
        .target_year
        .as_deref()
        .and_then(|year| find_year_column(table, year, header_rows, row_index, label_column))
        .map(|column| (column, ColumnSource::HeaderMatch))
        .unwrap_or((options.fallback_column, ColumnSource::Fallback))
}

fn first_non_empty(row: &[String]) -> Option<&str> {
    row.iter().map(|c| c.trim()).find(|c| !c.is_empty())
}
