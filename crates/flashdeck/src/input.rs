//! Reading notes from files and uploads.

use std::fs;
use std::path::Path;

use crate::error::{FlashdeckError, Result};

/// File extensions accepted as notes.
pub const NOTES_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

const UTF8_BOM: &str = "\u{feff}";

/// Read a notes file as text.
pub fn read_notes(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| FlashdeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_notes(&bytes).map_err(|e| match e {
        FlashdeckError::Decode(msg) => {
            FlashdeckError::Decode(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Decode uploaded bytes as UTF-8 notes, dropping a leading byte-order mark.
pub fn decode_notes(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| FlashdeckError::Decode(format!("not valid UTF-8 text ({})", e)))?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}

/// Whether `path` has a notes extension.
pub fn is_supported_notes_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            NOTES_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
