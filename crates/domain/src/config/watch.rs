use serde::{Deserialize, Serialize};

/// What to monitor. All fields default so a partial config file parses;
/// startup code decides whether name/expected/servers are actually present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchConfig {
    /// DNS name to look up
    #[serde(default)]
    pub name: String,

    /// Address every answer record is expected to carry
    #[serde(default)]
    pub expected: String,

    /// Name servers to check, in reporting order.
    /// Entries may be IP literals (port 53 assumed), `ip:port`, or hostnames.
    #[serde(default)]
    pub servers: Vec<String>,

    /// Milliseconds between sweeps (default: 500)
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Per-query timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Check servers concurrently within a sweep instead of one by one
    #[serde(default)]
    pub concurrent: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            expected: String::new(),
            servers: Vec::new(),
            interval_ms: default_interval_ms(),
            timeout_ms: default_timeout_ms(),
            concurrent: false,
        }
    }
}

fn default_interval_ms() -> u64 {
    500
}

fn default_timeout_ms() -> u64 {
    5000
}
