//! Acceptance rules for incoming documents: file type and size.

use std::path::Path;

/// Extension every accepted document must carry (compared ASCII case-insensitively).
pub const SVG_EXTENSION: &str = ".svg";

/// Errors produced while admitting a document for analysis.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// The file name does not end in `.svg`.
    #[error("Only SVG files are allowed: {filename}")]
    UnsupportedType { filename: String },

    /// The document is larger than the configured limit.
    #[error("document is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    /// Reading the document failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Check a document's name and size against the acceptance rules.
///
/// # Errors
///
/// Returns [`IntakeError::UnsupportedType`] for names not ending in `.svg`
/// and [`IntakeError::TooLarge`] when `size` exceeds `limit`.
pub fn check_document(filename: &str, size: u64, limit: u64) -> Result<(), IntakeError> {
    if !is_svg_name(filename) {
        return Err(IntakeError::UnsupportedType { filename: filename.to_owned() });
    }
    if size > limit {
        return Err(IntakeError::TooLarge { size, limit });
    }
    Ok(())
}

/// Read a document from disk after checking it against the acceptance rules.
///
/// The size is checked from file metadata before any bytes are read.
///
/// Bytes that are not UTF-8 (for example a Latin-1 `<title>`) are replaced
/// with U+FFFD rather than rejected.
///
/// # Errors
///
/// Returns an [`IntakeError`] if the document is rejected or cannot be read.
pub async fn read_document(path: &Path, limit: u64) -> Result<String, IntakeError> {
    let filename = display_name(path);
    let size = tokio::fs::metadata(path).await?.len();
    check_document(&filename, size, limit)?;

    let bytes = tokio::fs::read(path).await?;
    // The file may have grown between the metadata call and the read.
    check_document(&filename, bytes.len() as u64, limit)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Final path component, or the whole path when there is none.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

fn is_svg_name(filename: &str) -> bool {
    filename.len() >= SVG_EXTENSION.len()
        && filename.as_bytes()[filename.len() - SVG_EXTENSION.len()..].eq_ignore_ascii_case(SVG_EXTENSION.as_bytes())
}

#[cfg(test)]
#[path = "intake_test.rs"]
mod tests;
