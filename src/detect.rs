//! Input document detection and validation.
//!
//! The analysis service accepts PDF, PNG, JPEG and TIFF documents. Inputs
//! are checked here, before any network call, so that obviously wrong
//! files fail fast with a local error.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Largest document accepted by synchronous analysis (10 MiB).
pub const MAX_SYNC_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Detected document format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFormat {
    /// PDF with its header version (e.g., "1.7")
    Pdf { version: String },
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
    /// TIFF image
    Tiff,
}

impl DocumentFormat {
    /// Whether this is a PDF.
    pub fn is_pdf(&self) -> bool {
        matches!(self, DocumentFormat::Pdf { .. })
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf { version } => write!(f, "PDF {}", version),
            DocumentFormat::Png => write!(f, "PNG"),
            DocumentFormat::Jpeg => write!(f, "JPEG"),
            DocumentFormat::Tiff => write!(f, "TIFF"),
        }
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = b"\xff\xd8\xff";
const TIFF_LE_MAGIC: &[u8] = b"II*\x00";
const TIFF_BE_MAGIC: &[u8] = b"MM\x00*";

/// Detect the document format from a file path.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocumentFormat> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut header = Vec::with_capacity(16);
    reader.take(16).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the document format from its leading bytes.
///
/// # Returns
/// * `Ok(DocumentFormat)` if the data starts with a supported signature
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocumentFormat> {
    if data.starts_with(PDF_MAGIC) {
        if data.len() < PDF_MAGIC_LEN + VERSION_LEN {
            return Err(Error::UnknownFormat);
        }
        let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
        let version = String::from_utf8_lossy(version_bytes).to_string();
        if !is_valid_version(&version) {
            return Err(Error::UnknownFormat);
        }
        return Ok(DocumentFormat::Pdf { version });
    }

    if data.starts_with(PNG_MAGIC) {
        Ok(DocumentFormat::Png)
    } else if data.starts_with(JPEG_MAGIC) {
        Ok(DocumentFormat::Jpeg)
    } else if data.starts_with(TIFF_LE_MAGIC) || data.starts_with(TIFF_BE_MAGIC) {
        Ok(DocumentFormat::Tiff)
    } else {
        Err(Error::UnknownFormat)
    }
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check that a document can be submitted for synchronous analysis.
pub fn validate_document(data: &[u8]) -> Result<DocumentFormat> {
    if data.len() > MAX_SYNC_DOCUMENT_BYTES {
        return Err(Error::DocumentTooLarge {
            size: data.len(),
            limit: MAX_SYNC_DOCUMENT_BYTES,
        });
    }
    detect_format_from_bytes(data)
}

/// Read a document from disk and validate it for submission.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let format = validate_document(&data)?;
    log::debug!(
        "read {} ({}, {} bytes)",
        path.display(),
        format,
        data.len()
    );
    Ok(data)
}

/// Check if bytes start with a supported document signature.
pub fn is_supported_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
