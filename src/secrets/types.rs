//! Core types for unseal key resolution.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Key sources
// ============================================================================

/// Where the unseal key is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySourceKind {
    /// Key passed verbatim.
    Key,
    /// Environment variable holding the key.
    Env,
    /// File holding the key.
    File,
}

/// The `unseal` block of the settings record.
///
/// Raw input may set more than one field; [`crate::config::Settings`]
/// blanks the lower-precedence fields when a flag overrides them, and the
/// resolver picks the first non-empty one in `key`, `env`, `file` order.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnsealSource {
    pub key: String,
    pub env: String,
    pub file: String,
}

impl UnsealSource {
    /// Source that holds only an explicit key.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Source that holds only an environment variable name.
    pub fn from_env(name: impl Into<String>) -> Self {
        Self {
            env: name.into(),
            ..Self::default()
        }
    }

    /// Source that holds only a file path.
    pub fn from_file(path: impl Into<String>) -> Self {
        Self {
            file: path.into(),
            ..Self::default()
        }
    }

    /// The source that resolution would use, if any.
    pub fn active_kind(&self) -> Option<KeySourceKind> {
        if !self.key.is_empty() {
            Some(KeySourceKind::Key)
        } else if !self.env.is_empty() {
            Some(KeySourceKind::Env)
        } else if !self.file.is_empty() {
            Some(KeySourceKind::File)
        } else {
            None
        }
    }
}

// The explicit key must never reach a log line through `{:?}`.
impl fmt::Debug for UnsealSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsealSource")
            .field("key", &redact_secret(&self.key))
            .field("env", &self.env)
            .field("file", &self.file)
            .finish()
    }
}

// ============================================================================
// Resolved key
// ============================================================================

/// A resolved unseal key. Immutable, and redacted in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct UnsealKey(String);

impl UnsealKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw key, for handing to the Vault API.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UnsealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnsealKey({})", redact_secret(&self.0))
    }
}

// ============================================================================
// Errors
// ============================================================================

/// No usable key could be determined. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum KeyResolutionError {
    #[error("unseal environment variable is not set: {0}")]
    MissingEnvVar(String),

    #[error("unseal environment variable is not valid UTF-8: {0}")]
    NonUnicodeEnvVar(String),

    #[error("error reading unseal key file {}: {source}", path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no unseal key provided (set one of unseal key, env or file)")]
    NoKeySource,
}

/// Redact a secret value for display.
pub fn redact_secret(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "***"
    }
}
