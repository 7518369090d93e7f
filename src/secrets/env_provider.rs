//! Environment variable key provider.

use super::types::{KeyResolutionError, UnsealKey};
use std::env::VarError;

/// Read the unseal key from the environment variable `name`.
///
/// The value is returned verbatim. A variable that is set but empty still
/// counts as present; one that is not valid UTF-8 is rejected rather than
/// altered.
pub fn read_env_key(name: &str) -> Result<UnsealKey, KeyResolutionError> {
    match std::env::var(name) {
        Ok(value) => Ok(UnsealKey::new(value)),
        Err(VarError::NotPresent) => Err(KeyResolutionError::MissingEnvVar(name.to_string())),
        Err(VarError::NotUnicode(_)) => {
            Err(KeyResolutionError::NonUnicodeEnvVar(name.to_string()))
        }
    }
}
