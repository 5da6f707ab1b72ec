//! Loading marketplace documents from disk.

use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::core::ValidatorError;

/// Read and parse a marketplace document.
///
/// The path must exist and be a regular file, its content must be UTF-8, and
/// it must parse as JSON. Any other JSON value (array, string, ...) is
/// returned as-is; shape problems are the validator's concern.
///
/// # Errors
///
/// - [`ValidatorError::FileNotFound`] if the path does not exist
/// - [`ValidatorError::NotAFile`] if it is a directory or other non-regular file
/// - [`ValidatorError::ReadError`] if the content cannot be read as UTF-8
/// - [`ValidatorError::InvalidJson`] if the content is not valid JSON
pub fn load_document(path: &Path) -> Result<Value, ValidatorError> {
    let shown = path.display().to_string();

    if !path.exists() {
        return Err(ValidatorError::FileNotFound {
            path: shown,
        });
    }

    if !path.is_file() {
        return Err(ValidatorError::NotAFile {
            path: shown,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ValidatorError::ReadError {
        path: shown.clone(),
        reason: e.to_string(),
    })?;
    debug!("Read {} bytes from {}", content.len(), shown);

    serde_json::from_str(&content).map_err(|e| ValidatorError::InvalidJson {
        path: shown,
        reason: e.to_string(),
    })
}
