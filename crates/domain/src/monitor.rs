use crate::{CheckTarget, MonitorError};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

/// Everything the monitor loop needs, fixed for the process lifetime.
///
/// Construction dedupes the server list (first occurrence wins, order kept)
/// and rejects an empty list. A timeout that is not strictly below the
/// interval is legal but suspect; `sanity_warnings` surfaces it so startup
/// code can log it without the core enforcing anything.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub name: Arc<str>,
    pub expected: IpAddr,
    pub servers: Vec<SocketAddr>,
    pub interval: Duration,
    pub timeout: Duration,
    pub concurrent: bool,
}

impl MonitorConfig {
    pub fn new(
        name: impl Into<Arc<str>>,
        expected: IpAddr,
        servers: Vec<SocketAddr>,
        interval: Duration,
        timeout: Duration,
    ) -> Result<Self, MonitorError> {
        let mut deduped: Vec<SocketAddr> = Vec::with_capacity(servers.len());
        for server in servers {
            if !deduped.contains(&server) {
                deduped.push(server);
            }
        }
        if deduped.is_empty() {
            return Err(MonitorError::NoServers);
        }
        Ok(Self {
            name: name.into(),
            expected,
            servers: deduped,
            interval,
            timeout,
            concurrent: false,
        })
    }

    pub fn with_concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    /// One target per configured server, in configuration order.
    pub fn targets(&self) -> impl Iterator<Item = CheckTarget> + '_ {
        self.servers.iter().map(|server| CheckTarget {
            name: Arc::clone(&self.name),
            expected: self.expected,
            server: *server,
            timeout: self.timeout,
        })
    }

    /// Deployment smells worth a startup log line. Never fatal.
    pub fn sanity_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.timeout >= self.interval {
            warnings.push(format!(
                "timeout ({}ms) is not below interval ({}ms); a slow server can eat whole ticks",
                self.timeout.as_millis(),
                self.interval.as_millis()
            ));
        }
        warnings
    }
}
