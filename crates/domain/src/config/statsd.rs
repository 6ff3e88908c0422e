use serde::{Deserialize, Serialize};

/// Metrics collector endpoint. Presence of this section switches reporting
/// from log lines to statsd datagrams.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsdConfig {
    /// Collector to send to, `host` or `host:port` (default port: 8125)
    pub host: String,

    /// Namespace prepended to every metric name (default: "dnswatch")
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl StatsdConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "dnswatch".to_string()
}
