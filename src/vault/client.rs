//! HashiCorp Vault HTTP client for the seal endpoints.

use super::types::{ClientSetupError, SealStatus, VaultApiError, VaultErrorBody};
use super::SealService;
use crate::secrets::UnsealKey;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Transport timeout for each Vault request, matching the official client.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct UnsealRequest<'a> {
    key: &'a str,
}

/// Vault REST client scoped to the `sys/seal-status` and `sys/unseal` calls.
#[derive(Debug, Clone)]
pub struct VaultClient {
    http: Client,
    base_url: String,
}

impl VaultClient {
    fn user_agent() -> String {
        format!("vault-autounseal/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Build a client for the Vault server at `address`.
    pub fn new(address: &str) -> Result<Self, ClientSetupError> {
        let parsed = Url::parse(address).map_err(|source| ClientSetupError::InvalidAddress {
            address: address.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientSetupError::UnsupportedScheme(address.to_string()));
        }

        let http = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(ClientSetupError::Build)?;

        Ok(Self {
            http,
            base_url: address.trim_end_matches('/').to_owned(),
        })
    }

    /// The normalized server address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.base_url)
    }

    /// Turn a response into a `SealStatus`, surfacing Vault's error list on
    /// non-2xx answers.
    async fn read_status(resp: Response) -> Result<SealStatus, VaultApiError> {
        let status = resp.status();
        if status.is_success() {
            return resp.json::<SealStatus>().await.map_err(VaultApiError::Decode);
        }

        let text = resp.text().await.unwrap_or_default();
        let body: VaultErrorBody = serde_json::from_str(&text).unwrap_or_default();
        let message = if !body.errors.is_empty() {
            body.errors.join("; ")
        } else if !text.trim().is_empty() {
            text.trim().to_string()
        } else {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        };

        Err(VaultApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl SealService for VaultClient {
    async fn seal_status(&self) -> Result<SealStatus, VaultApiError> {
        let url = self.endpoint("sys/seal-status");
        debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(VaultApiError::Network)?;

        Self::read_status(resp).await
    }

    async fn unseal(&self, key: &UnsealKey) -> Result<SealStatus, VaultApiError> {
        let url = self.endpoint("sys/unseal");
        debug!("PUT {url}");

        let resp = self
            .http
            .put(&url)
            .header("Accept", "application/json")
            .json(&UnsealRequest { key: key.expose() })
            .send()
            .await
            .map_err(VaultApiError::Network)?;

        Self::read_status(resp).await
    }
}
