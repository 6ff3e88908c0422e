use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::statsd::StatsdConfig;
use super::watch::WatchConfig;

/// Top-level configuration: TOML file first, then command-line overrides
/// applied field by field.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,

    /// Optional statsd sink. Absent means results go to the log.
    #[serde(default)]
    pub statsd: Option<StatsdConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub name: Option<String>,
    pub expected: Option<String>,
    pub servers: Option<Vec<String>>,
    pub interval_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub concurrent: bool,
    pub statsd_host: Option<String>,
    pub statsd_prefix: Option<String>,
    pub log_level: Option<String>,
    pub log_json: bool,
}

impl Config {
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    fn apply(&mut self, overrides: CliOverrides) {
        if let Some(name) = overrides.name {
            self.watch.name = name;
        }
        if let Some(expected) = overrides.expected {
            self.watch.expected = expected;
        }
        if let Some(servers) = overrides.servers {
            self.watch.servers = servers;
        }
        if let Some(interval_ms) = overrides.interval_ms {
            self.watch.interval_ms = interval_ms;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.watch.timeout_ms = timeout_ms;
        }
        if overrides.concurrent {
            self.watch.concurrent = true;
        }
        if let Some(host) = overrides.statsd_host {
            match self.statsd.as_mut() {
                Some(statsd) => statsd.host = host,
                None => self.statsd = Some(StatsdConfig::new(host)),
            }
        }
        if let Some(prefix) = overrides.statsd_prefix {
            // A prefix without a sink configures nothing
            if let Some(statsd) = self.statsd.as_mut() {
                statsd.prefix = prefix;
            }
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.log_json {
            self.logging.json = true;
        }
    }

    /// Fields that must be filled in (by file or flags) before the monitor
    /// can start. Empty means ready.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.watch.name.is_empty() {
            missing.push("name");
        }
        if self.watch.expected.is_empty() {
            missing.push("expected");
        }
        if self.watch.servers.is_empty() {
            missing.push("servers");
        }
        missing
    }
}
