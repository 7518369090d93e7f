mod defaults;
mod io;
mod validation;

pub use defaults::*;
pub use io::*;
pub use validation::*;

use crate::secrets::UnsealSource;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// The settings record: where Vault lives, how often to poll it, and where
/// the unseal key comes from.
///
/// Built once at startup from the configuration file with command-line flags
/// laid over it, then handed to key resolution and the unseal loop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub address: String,
    pub loop_seconds: u64,
    pub unseal: UnsealSource,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides {
    pub address: Option<String>,
    pub loop_seconds: Option<u64>,
    pub unseal_key: Option<String>,
    pub unseal_env: Option<String>,
    pub unseal_file: Option<String>,
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Settings {
    /// Build the final record: file, then flags, then `VAULT_ADDR`/default
    /// address, then validation.
    ///
    /// `config_path` of `None` means [`DEFAULT_CONFIG_PATH`]. Either way the
    /// file must be readable.
    pub fn build(config_path: Option<&Path>, overrides: &FlagOverrides) -> Result<Self> {
        let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        let mut settings = Self::load(path)?;

        settings.apply_flag_overrides(overrides);
        settings.apply_env_overrides();
        validate_settings_object(&settings)?;

        debug!(
            address = %settings.address,
            loop_seconds = settings.loop_seconds,
            unseal_source = ?settings.unseal.active_kind(),
            "Settings resolved"
        );
        Ok(settings)
    }

    /// Load settings from a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading config from {}", path.display());
        load_config_file(path)
    }

    /// Lay command-line flags over the file values.
    ///
    /// Any supplied flag wins over the file; empty strings and a zero
    /// interval count as not supplied. Unseal flags are applied from
    /// least to most important (file, env, key), and each one blanks the
    /// other two so the file cannot leave a stale higher-precedence source
    /// behind.
    pub fn apply_flag_overrides(&mut self, overrides: &FlagOverrides) {
        if let Some(address) = supplied(&overrides.address) {
            self.address = address.to_string();
        }

        if let Some(seconds) = overrides.loop_seconds.filter(|s| *s != 0) {
            self.loop_seconds = seconds;
        }

        if let Some(file) = supplied(&overrides.unseal_file) {
            self.unseal = UnsealSource::from_file(file);
        }

        if let Some(env) = supplied(&overrides.unseal_env) {
            self.unseal = UnsealSource::from_env(env);
        }

        if let Some(key) = supplied(&overrides.unseal_key) {
            self.unseal = UnsealSource::from_key(key);
        }
    }

    /// Fill in the address from `VAULT_ADDR`, or the local default, when
    /// neither the file nor the flags set one.
    pub fn apply_env_overrides(&mut self) {
        if !self.address.is_empty() {
            return;
        }

        self.address = std::env::var(VAULT_ADDR_ENV)
            .ok()
            .filter(|addr| !addr.is_empty())
            .unwrap_or_else(|| DEFAULT_VAULT_ADDRESS.to_string());
    }

    /// Wait between loop iterations.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.loop_seconds)
    }
}
