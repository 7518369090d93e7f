use crate::vault::{SealStatus, VaultApiError};

/// What a single loop iteration ended with.
#[derive(Debug)]
pub enum IterationOutcome {
    /// Vault was not sealed; nothing to do.
    AlreadyUnsealed,
    /// Vault was sealed and the unseal call opened it.
    Unsealed,
    /// The unseal call went through but Vault is still sealed.
    Rejected(SealStatus),
    /// The seal-status query failed.
    PollFailed(VaultApiError),
    /// The unseal call itself failed.
    UnsealFailed(VaultApiError),
}

/// Counters for a loop run, reported when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub iterations: u64,
    pub already_unsealed: u64,
    pub unsealed: u64,
    pub rejected: u64,
    pub poll_errors: u64,
    pub unseal_errors: u64,
}

impl LoopStats {
    pub fn record(&mut self, outcome: &IterationOutcome) {
        self.iterations += 1;
        let counter = match outcome {
            IterationOutcome::AlreadyUnsealed => &mut self.already_unsealed,
            IterationOutcome::Unsealed => &mut self.unsealed,
            IterationOutcome::Rejected(_) => &mut self.rejected,
            IterationOutcome::PollFailed(_) => &mut self.poll_errors,
            IterationOutcome::UnsealFailed(_) => &mut self.unseal_errors,
        };
        *counter += 1;
    }

    /// Number of unseal calls made.
    pub fn unseal_attempts(&self) -> u64 {
        self.unsealed + self.rejected + self.unseal_errors
    }
}
