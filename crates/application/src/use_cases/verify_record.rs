use crate::ports::RecordProber;
use dnswatch_domain::{CheckOutcome, CheckResult, CheckTarget};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Use case: run one check against one server and classify the answer
///
/// The verdict ladder, first match wins:
///   1. probe failed                      -> QueryError
///   2. zero addresses in the answer      -> EmptyAnswer
///   3. any address differs from expected -> Mismatch (first offender kept)
///   4. otherwise                         -> Success
pub struct VerifyRecordUseCase {
    prober: Arc<dyn RecordProber>,
}

impl VerifyRecordUseCase {
    pub fn new(prober: Arc<dyn RecordProber>) -> Self {
        Self { prober }
    }

    pub async fn execute(&self, target: &CheckTarget) -> CheckResult {
        debug!(server = %target.server, name = %target.name, "Checking record");

        let started = Instant::now();
        let probed = self.prober.probe(target).await;
        let elapsed = started.elapsed();

        let outcome = match probed {
            Err(e) => CheckOutcome::QueryError(e),
            Ok(answer) if answer.addresses.is_empty() => CheckOutcome::EmptyAnswer {
                rcode: answer.rcode.to_string(),
            },
            Ok(answer) => {
                match answer.addresses.iter().find(|ip| **ip != target.expected) {
                    Some(actual) => CheckOutcome::Mismatch {
                        expected: target.expected,
                        actual: *actual,
                    },
                    None => CheckOutcome::Success,
                }
            }
        };

        debug!(
            server = %target.server,
            verdict = outcome.label(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Check classified"
        );

        CheckResult {
            server: target.server,
            elapsed,
            outcome,
        }
    }
}
