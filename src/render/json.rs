//! JSON rendering for extraction results.

use crate::error::{Error, Result};
use crate::model::ExtractionResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an extraction result to JSON.
///
/// The parsed number is included as `numeric_value` (null when the value
/// is not numeric).
pub fn to_json(result: &ExtractionResult, format: JsonFormat) -> Result<String> {
    let mut value = serde_json::to_value(result)
        .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))?;
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "numeric_value".to_string(),
            result.numeric_value().into(),
        );
    }

    let rendered = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&value),
        JsonFormat::Compact => serde_json::to_string(&value),
    };
    rendered.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
