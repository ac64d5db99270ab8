//! Console report for an extraction result.

use super::json::{to_json, JsonFormat};
use crate::error::Result;
use crate::model::ExtractionResult;
use std::io::Write;

/// How a result is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `Extracted Revenue: ...` followed by a debug line
    #[default]
    Text,
    /// The result as JSON
    Json(JsonFormat),
}

/// Render the two-line text report.
pub fn to_report(result: &ExtractionResult) -> String {
    format!(
        "Extracted Revenue: {}\nDebug: {}\n",
        result.value,
        result.debug_line()
    )
}

/// Write a report in the given format.
pub fn write_report<W: Write>(
    writer: &mut W,
    result: &ExtractionResult,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => writer.write_all(to_report(result).as_bytes())?,
        ReportFormat::Json(json_format) => {
            writeln!(writer, "{}", to_json(result, json_format)?)?;
        }
    }
    writer.flush()?;
    Ok(())
}
