use async_trait::async_trait;
use dnswatch_application::ports::CheckReporter;
use dnswatch_domain::CheckResult;
use tracing::{info, warn};

/// Reporter that writes one log line per check.
///
/// Successes at info, failures at warn, both carrying the server and the
/// elapsed milliseconds as structured fields.
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckReporter for LogReporter {
    async fn report(&self, result: &CheckResult) {
        if result.is_failure() {
            warn!(
                server = %result.server,
                elapsed_ms = result.elapsed_ms(),
                cause = %result.outcome,
                "DNS check failed"
            );
        } else {
            info!(
                server = %result.server,
                elapsed_ms = result.elapsed_ms(),
                "DNS check passed"
            );
        }
    }
}
