use dnswatch_application::use_cases::SweepUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Timer shell around `SweepUseCase`.
///
/// Fires one sweep per interval tick. A sweep that overruns its interval
/// delays nothing and doubles nothing: the loop does not poll the timer
/// while a sweep runs, and ticks that passed in the meantime are skipped,
/// so the next sweep comes on the next live tick. The first sweep fires
/// one full interval after start.
pub struct MonitorJob {
    sweep: Arc<SweepUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl MonitorJob {
    pub fn new(sweep: Arc<SweepUseCase>, interval: Duration) -> Self {
        Self {
            sweep,
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting monitor job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("MonitorJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let failures = self.sweep.execute().await;
                        debug!(failures, "MonitorJob: sweep tick complete");
                    }
                }
            }
        })
    }
}
