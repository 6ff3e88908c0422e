//! dnswatch Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::{CheckReporter, RecordAnswer, RecordProber};
pub use use_cases::{SweepUseCase, VerifyRecordUseCase};
