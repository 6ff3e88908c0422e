//! dnswatch Infrastructure Layer
pub mod dns;
pub mod reporting;

pub use dns::UdpRecordProber;
pub use reporting::{LogReporter, StatsdReporter};
