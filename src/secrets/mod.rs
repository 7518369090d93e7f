//! Unseal key resolution.
//!
//! The key can come from three places, checked in a fixed order:
//! 1. **Key** — passed directly in settings or on the command line
//! 2. **Env** — read from a named environment variable
//! 3. **File** — read from a file, surrounding whitespace stripped
//!
//! The first source that is set wins. A missing env var or unreadable file
//! is an error; it never falls through to the next source.

pub mod env_provider;
pub mod file_provider;
pub mod resolver;
pub mod types;

pub use resolver::resolve_unseal_key;
pub use types::{KeyResolutionError, KeySourceKind, UnsealKey, UnsealSource};
