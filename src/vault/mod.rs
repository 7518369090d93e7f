//! Remote Vault seal surface.
//!
//! The controller only needs two calls, seal status and unseal, so they sit
//! behind [`SealService`]. [`VaultClient`] implements it over the HTTP API.

pub mod client;
pub mod types;

pub use client::VaultClient;
pub use types::{ClientSetupError, SealStatus, VaultApiError};

use crate::secrets::UnsealKey;
use async_trait::async_trait;
use std::sync::Arc;

/// The two Vault operations the unseal loop relies on.
#[async_trait]
pub trait SealService: Send + Sync {
    /// Query the current seal status.
    async fn seal_status(&self) -> Result<SealStatus, VaultApiError>;

    /// Submit an unseal key and return the seal status after the call.
    async fn unseal(&self, key: &UnsealKey) -> Result<SealStatus, VaultApiError>;
}

#[async_trait]
impl<T: SealService + ?Sized> SealService for Arc<T> {
    async fn seal_status(&self) -> Result<SealStatus, VaultApiError> {
        (**self).seal_status().await
    }

    async fn unseal(&self, key: &UnsealKey) -> Result<SealStatus, VaultApiError> {
        (**self).unseal(key).await
    }
}
