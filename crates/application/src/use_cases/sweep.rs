use crate::ports::CheckReporter;
use crate::use_cases::VerifyRecordUseCase;
use dnswatch_domain::MonitorConfig;
use futures::future::join_all;
use std::sync::Arc;
use tracing::debug;

/// Use case: check every configured server once
///
/// Sequential by default: each server is checked and its result reported
/// before the next server is touched, in configuration order. With
/// `concurrent` set, all servers are probed at once and results land in
/// completion order; either way every report has been delivered by the
/// time `execute` returns.
pub struct SweepUseCase {
    verify: Arc<VerifyRecordUseCase>,
    reporter: Arc<dyn CheckReporter>,
    config: MonitorConfig,
}

impl SweepUseCase {
    pub fn new(
        verify: Arc<VerifyRecordUseCase>,
        reporter: Arc<dyn CheckReporter>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            verify,
            reporter,
            config,
        }
    }

    /// Returns the number of failed checks in this sweep.
    pub async fn execute(&self) -> u64 {
        let failures = if self.config.concurrent {
            self.execute_concurrent().await
        } else {
            self.execute_sequential().await
        };

        debug!(
            servers = self.config.servers.len(),
            failures, "Sweep complete"
        );
        failures
    }

    async fn execute_sequential(&self) -> u64 {
        let mut failures = 0;
        for target in self.config.targets() {
            let result = self.verify.execute(&target).await;
            if result.is_failure() {
                failures += 1;
            }
            self.reporter.report(&result).await;
        }
        failures
    }

    async fn execute_concurrent(&self) -> u64 {
        let checks = self.config.targets().map(|target| async move {
            let result = self.verify.execute(&target).await;
            self.reporter.report(&result).await;
            u64::from(result.is_failure())
        });

        join_all(checks).await.into_iter().sum()
    }
}
