//! The unseal loop.
//!
//! Every `interval` the controller asks Vault for its seal status and, when
//! sealed, submits the resolved key. Failures are logged and absorbed; the
//! next tick is the retry. The loop only stops when its shutdown token is
//! cancelled.

mod controller;
mod outcome;

pub use controller::UnsealController;
pub use outcome::{IterationOutcome, LoopStats};
