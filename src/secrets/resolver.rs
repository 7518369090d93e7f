//! Picks the active key source and resolves it.

use super::env_provider::read_env_key;
use super::file_provider::read_file_key;
use super::types::{KeyResolutionError, KeySourceKind, UnsealKey, UnsealSource};
use std::path::Path;
use tracing::info;

/// Resolve the unseal key from `source`.
///
/// Checks `key`, then `env`, then `file`; the first non-empty field wins and
/// its failure is returned as is. Logs which source was used, never the key.
pub fn resolve_unseal_key(source: &UnsealSource) -> Result<UnsealKey, KeyResolutionError> {
    match source.active_kind() {
        Some(KeySourceKind::Key) => {
            info!("Using passed unseal key");
            Ok(UnsealKey::new(source.key.clone()))
        }
        Some(KeySourceKind::Env) => {
            let key = read_env_key(&source.env)?;
            info!("Using environment var {} for unseal key", source.env);
            Ok(key)
        }
        Some(KeySourceKind::File) => {
            let key = read_file_key(Path::new(&source.file))?;
            info!("Using file {} for unseal key", source.file);
            Ok(key)
        }
        None => Err(KeyResolutionError::NoKeySource),
    }
}
