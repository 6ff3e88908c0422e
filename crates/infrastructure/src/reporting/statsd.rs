use async_trait::async_trait;
use dnswatch_application::ports::CheckReporter;
use dnswatch_domain::{CheckResult, MonitorError};
use std::net::{IpAddr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::{debug, info};

/// Standard statsd collector port, applied when the endpoint carries none.
const STATSD_PORT: u16 = 8125;

/// Reporter that emits dogstatsd datagrams over UDP.
///
/// One datagram per check: failures increment `{prefix}.error`, successes
/// time `{prefix}.time`, both tagged with the checked server. Construction
/// fails when the collector endpoint cannot be resolved; after that, sends
/// are fire-and-forget and a lost datagram only gets a debug line.
pub struct StatsdReporter {
    socket: UdpSocket,
    prefix: String,
}

impl StatsdReporter {
    pub async fn connect(host: &str, prefix: impl Into<String>) -> Result<Self, MonitorError> {
        let endpoint = Self::resolve_endpoint(host).await?;

        let bind_addr: SocketAddr = if endpoint.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| MonitorError::SinkUnavailable(format!("Failed to bind statsd socket: {e}")))?;

        socket.connect(endpoint).await.map_err(|e| {
            MonitorError::SinkUnavailable(format!("Failed to connect to statsd at {endpoint}: {e}"))
        })?;

        let prefix = prefix.into();
        info!(endpoint = %endpoint, prefix = %prefix, "statsd reporter connected");

        Ok(Self { socket, prefix })
    }

    /// Accepts `ip:port`, a bare IP, `host:port` or a bare hostname.
    async fn resolve_endpoint(raw: &str) -> Result<SocketAddr, MonitorError> {
        if let Ok(addr) = raw.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = raw.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, STATSD_PORT));
        }

        let candidate = if raw.contains(':') {
            raw.to_string()
        } else {
            format!("{raw}:{STATSD_PORT}")
        };

        let resolved = tokio::net::lookup_host(candidate.as_str())
            .await
            .map_err(|e| {
                MonitorError::SinkUnavailable(format!("Failed to resolve statsd host '{raw}': {e}"))
            })?
            .next()
            .ok_or_else(|| {
                MonitorError::SinkUnavailable(format!("statsd host '{raw}' resolved to no addresses"))
            });
        resolved
    }

    fn format_datagram(&self, result: &CheckResult) -> String {
        if result.is_failure() {
            format!("{}.error:1|c|#server:{}", self.prefix, result.server)
        } else {
            format!(
                "{}.time:{}|ms|#server:{}",
                self.prefix,
                result.elapsed_ms(),
                result.server
            )
        }
    }
}

#[async_trait]
impl CheckReporter for StatsdReporter {
    async fn report(&self, result: &CheckResult) {
        let datagram = self.format_datagram(result);
        if let Err(e) = self.socket.send(datagram.as_bytes()).await {
            debug!(error = %e, "Failed to send statsd datagram");
        }
    }
}
