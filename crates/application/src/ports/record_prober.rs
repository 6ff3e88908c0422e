use async_trait::async_trait;
use dnswatch_domain::{CheckTarget, MonitorError};
use std::net::IpAddr;

/// Raw result of one address lookup, before any verdict is attached.
///
/// `addresses` holds every A or AAAA record in the answer section, in wire
/// order. `rcode` is the response code as text (NOERROR, NXDOMAIN, ...) and
/// is carried for diagnostics; classification looks only at the addresses.
#[derive(Debug, Clone)]
pub struct RecordAnswer {
    pub addresses: Vec<IpAddr>,
    pub rcode: &'static str,
}

/// Application-layer port for the single-query lookup.
///
/// One call performs one exchange with one server and nothing more: no
/// retries, no failover, no caching. Errors cover everything from a bad
/// name to a timeout; an answer with zero addresses is NOT an error here,
/// the caller decides what that means.
#[async_trait]
pub trait RecordProber: Send + Sync {
    async fn probe(&self, target: &CheckTarget) -> Result<RecordAnswer, MonitorError>;
}
