//! Revenue extraction from analysed documents.
//!
//! The stages run in order over one [`AnalysisResponse`]:
//! [`find_heading_page`] picks the statement page, [`tables_on_page`]
//! rebuilds its tables and [`resolve`] reads the labelled value.

mod amount;
mod locate;
mod options;
mod reconstruct;
mod resolve;
mod text;

pub use amount::parse_amount;
pub use locate::{find_heading_page, page_lines};
pub use options::{
    ExtractOptions, DEFAULT_FALLBACK_COLUMN, DEFAULT_HEADER_ROWS, DEFAULT_HEADING, DEFAULT_LABEL,
};
pub use reconstruct::{build_table, tables_on_page};
pub use resolve::{find_label_row, find_year_column, resolve, select_column};
pub use text::{contains_normalized, normalize};

use crate::error::{Error, Result};
use crate::model::{AnalysisResponse, BlockIndex, ExtractionResult};
use crate::Stage;

/// Run page location, table reconstruction and resolution over a response.
pub fn extract_from_response(
    response: &AnalysisResponse,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    if response.is_empty() {
        return Err(Error::EmptyResponse);
    }
    let index = BlockIndex::new(&response.blocks);

    log::debug!("{}: {} blocks", Stage::LocatingPage, index.len());
    let page = find_heading_page(&index, &options.heading)?;

    log::debug!("{}: page {}", Stage::ReconstructingTables, page);
    let tables = tables_on_page(&index, page);

    log::debug!("{}: {} table(s)", Stage::ResolvingRevenue, tables.len());
    resolve(&tables, page, options)
}
