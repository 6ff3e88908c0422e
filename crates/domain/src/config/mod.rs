//! Configuration structures, one section per concern:
//! - `root`: top-level file layout and loading
//! - `watch`: what to monitor and how often
//! - `statsd`: optional metrics collector endpoint
//! - `logging`: log level and format

pub mod errors;
pub mod logging;
pub mod root;
pub mod statsd;
pub mod watch;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use statsd::StatsdConfig;
pub use watch::WatchConfig;
