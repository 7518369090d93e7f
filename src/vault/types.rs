//! Wire types and errors for the Vault seal endpoints.

use serde::Deserialize;

/// Response of `sys/seal-status` and `sys/unseal`.
///
/// Only `sealed` is required; the rest is informational and defaults when a
/// server omits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SealStatus {
    pub sealed: bool,
    #[serde(default, rename = "type")]
    pub seal_type: String,
    #[serde(default)]
    pub initialized: bool,
    /// Unseal threshold.
    #[serde(default)]
    pub t: u32,
    /// Number of key shares.
    #[serde(default)]
    pub n: u32,
    /// Shares submitted towards the threshold so far.
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub cluster_name: Option<String>,
}

impl SealStatus {
    pub fn sealed() -> Self {
        Self {
            sealed: true,
            ..Self::default()
        }
    }

    pub fn unsealed() -> Self {
        Self {
            sealed: false,
            ..Self::default()
        }
    }
}

/// Error body returned by Vault on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct VaultErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A Vault call failed. Never fatal inside the unseal loop.
#[derive(Debug, thiserror::Error)]
pub enum VaultApiError {
    #[error("network error communicating with Vault: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Vault returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed Vault response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The Vault client could not be built. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ClientSetupError {
    #[error("invalid Vault address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme in Vault address '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("unable to initialize Vault client: {0}")]
    Build(#[source] reqwest::Error),
}
