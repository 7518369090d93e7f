use crate::config::FlagOverrides;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vault-autounseal",
    version,
    about = "Keeps a Vault server unsealed by polling its seal status"
)]
pub struct Cli {
    /// Path to the configuration file to load
    #[arg(long, env = "VAULT_AUTOUNSEAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// The address of the Vault server
    #[arg(long)]
    pub address: Option<String>,

    /// The time to wait between loop iterations for unseal attempts
    #[arg(long = "loop-seconds")]
    pub loop_seconds: Option<u64>,

    /// The unseal key
    #[arg(long = "unseal-key")]
    pub unseal_key: Option<String>,

    /// The environment variable which contains the unseal key
    #[arg(long = "unseal-env")]
    pub unseal_env: Option<String>,

    /// The path to the file which contains the unseal key
    #[arg(long = "unseal-file")]
    pub unseal_file: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log line format
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// The flags that override configuration file values.
    pub fn overrides(&self) -> FlagOverrides {
        FlagOverrides {
            address: self.address.clone(),
            loop_seconds: self.loop_seconds,
            unseal_key: self.unseal_key.clone(),
            unseal_env: self.unseal_env.clone(),
            unseal_file: self.unseal_file.clone(),
        }
    }
}
