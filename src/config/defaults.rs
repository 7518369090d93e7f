//! Default configuration constants.

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "conf/configuration.yaml";

/// Environment variable consulted when no address is configured.
pub const VAULT_ADDR_ENV: &str = "VAULT_ADDR";

/// Address used when neither the settings nor `VAULT_ADDR` provide one.
pub const DEFAULT_VAULT_ADDRESS: &str = "https://127.0.0.1:8200";

/// Maximum size for a config file (1 MB).
pub const MAX_CONFIG_FILE_BYTES: u64 = 1024 * 1024;
