//! Rendering module for reporting extraction results.

mod json;
mod report;

pub use json::{to_json, JsonFormat};
pub use report::{to_report, write_report, ReportFormat};
