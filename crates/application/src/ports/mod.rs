pub mod check_reporter;
pub mod record_prober;

pub use check_reporter::CheckReporter;
pub use record_prober::{RecordAnswer, RecordProber};
