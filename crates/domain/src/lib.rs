//! dnswatch Domain Layer
pub mod check;
pub mod config;
pub mod errors;
pub mod monitor;
pub mod validators;

pub use check::{CheckOutcome, CheckResult, CheckTarget};
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, StatsdConfig, WatchConfig};
pub use errors::MonitorError;
pub use monitor::MonitorConfig;
pub use validators::{parse_expected_address, parse_server_entry, validate_name, DNS_PORT};
