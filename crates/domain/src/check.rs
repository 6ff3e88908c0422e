use crate::MonitorError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

/// One verification to perform: "does `server` resolve `name` to `expected`?"
/// Uses `Arc<str>` for the name so per-server targets clone cheaply.
#[derive(Debug, Clone)]
pub struct CheckTarget {
    pub name: Arc<str>,
    pub expected: IpAddr,
    pub server: SocketAddr,
    pub timeout: Duration,
}

impl CheckTarget {
    pub fn new(
        name: impl Into<Arc<str>>,
        expected: IpAddr,
        server: SocketAddr,
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            expected,
            server,
            timeout,
        }
    }
}

/// Verdict of a single check.
///
/// `EmptyAnswer` is a failure in its own right: a server that answers with
/// zero address records is not serving the name, even though the exchange
/// itself worked. The rcode text (NOERROR, NXDOMAIN, SERVFAIL, ...) is kept
/// for diagnostics only and does not affect classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Success,
    Mismatch { expected: IpAddr, actual: IpAddr },
    EmptyAnswer { rcode: String },
    QueryError(MonitorError),
}

impl CheckOutcome {
    pub fn is_failure(&self) -> bool {
        !matches!(self, CheckOutcome::Success)
    }

    /// Short tag for structured log fields and metric names.
    pub fn label(&self) -> &'static str {
        match self {
            CheckOutcome::Success => "success",
            CheckOutcome::Mismatch { .. } => "mismatch",
            CheckOutcome::EmptyAnswer { .. } => "empty_answer",
            CheckOutcome::QueryError(_) => "query_error",
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Success => write!(f, "ok"),
            CheckOutcome::Mismatch { expected, actual } => {
                write!(f, "expected {expected}, got {actual}")
            }
            CheckOutcome::EmptyAnswer { rcode } => write!(f, "empty answer ({rcode})"),
            CheckOutcome::QueryError(e) => write!(f, "{e}"),
        }
    }
}

/// Outcome of one check against one server, consumed once by a reporter.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub server: SocketAddr,
    pub elapsed: Duration,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }

    /// Elapsed wall-clock time in whole milliseconds, as reported to sinks.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}
