use async_trait::async_trait;
use dnswatch_domain::CheckResult;

/// Application-layer port for the result sink.
///
/// Sinks observe, they never steer: nothing a reporter does may change what
/// gets checked next. `report` is infallible by contract; a sink that cannot
/// deliver logs that itself and returns.
#[async_trait]
pub trait CheckReporter: Send + Sync {
    async fn report(&self, result: &CheckResult);
}
