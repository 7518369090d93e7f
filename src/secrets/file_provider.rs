//! File key provider.

use super::types::{KeyResolutionError, UnsealKey};
use std::path::Path;

/// Read the unseal key from `path`, stripping surrounding whitespace.
pub fn read_file_key(path: &Path) -> Result<UnsealKey, KeyResolutionError> {
    let body = std::fs::read_to_string(path).map_err(|source| KeyResolutionError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(UnsealKey::new(body.trim()))
}
