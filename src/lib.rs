//! Keeps a HashiCorp Vault server unsealed.
//!
//! Startup builds a [`config::Settings`] record from the configuration file
//! and command-line flags, [`secrets::resolve_unseal_key`] picks the unseal
//! key, and [`unseal::UnsealController`] polls Vault and unseals it whenever
//! it is found sealed.

pub mod cli;
pub mod config;
pub mod infra;
pub mod logging;
pub mod secrets;
pub mod unseal;
pub mod vault;
