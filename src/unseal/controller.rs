use super::outcome::{IterationOutcome, LoopStats};
use crate::secrets::UnsealKey;
use crate::vault::SealService;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Polls Vault and unseals it whenever it is found sealed.
///
/// Holds nothing mutable: the service handle and the key are fixed at
/// construction, and every iteration re-reads the seal status.
pub struct UnsealController<S> {
    service: S,
    key: UnsealKey,
    interval: Duration,
}

impl<S: SealService> UnsealController<S> {
    pub fn new(service: S, key: UnsealKey, interval: Duration) -> Self {
        Self {
            service,
            key,
            interval,
        }
    }

    /// Run one check-and-act step and log its outcome.
    ///
    /// Never returns an error: every failure is folded into the outcome.
    pub async fn check_once(&self) -> IterationOutcome {
        let status = match self.service.seal_status().await {
            Ok(status) => status,
            Err(e) => {
                error!("Unable to check Vault seal status: {e}");
                return IterationOutcome::PollFailed(e);
            }
        };
        debug!(
            sealed = status.sealed,
            progress = status.progress,
            threshold = status.t,
            "Checked Vault seal status"
        );

        if !status.sealed {
            info!("Vault is already unsealed");
            return IterationOutcome::AlreadyUnsealed;
        }

        info!("Vault is sealed; attempting unseal");

        let status = match self.service.unseal(&self.key).await {
            Ok(status) => status,
            Err(e) => {
                error!("Unable to unseal Vault: {e}");
                return IterationOutcome::UnsealFailed(e);
            }
        };

        if status.sealed {
            warn!(
                progress = status.progress,
                threshold = status.t,
                "Unable to unseal Vault; still sealed after submitting key"
            );
            return IterationOutcome::Rejected(status);
        }

        info!("Vault is unsealed; unseal successful");
        IterationOutcome::Unsealed
    }

    /// Loop until `shutdown` is cancelled: sleep, check, act, repeat.
    ///
    /// The token is only observed while sleeping, so an iteration that has
    /// started always runs to completion.
    pub async fn run(&self, shutdown: CancellationToken) -> LoopStats {
        let mut stats = LoopStats::default();
        info!(
            interval_secs = self.interval.as_secs_f64(),
            "Starting unseal loop"
        );

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }

            let outcome = self.check_once().await;
            stats.record(&outcome);
        }

        info!(
            iterations = stats.iterations,
            unsealed = stats.unsealed,
            poll_errors = stats.poll_errors,
            unseal_errors = stats.unseal_errors,
            rejected = stats.rejected,
            "Unseal loop stopped"
        );
        stats
    }
}
