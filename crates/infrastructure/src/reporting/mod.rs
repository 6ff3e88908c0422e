pub mod log;
pub mod statsd;

pub use log::LogReporter;
pub use statsd::StatsdReporter;
