pub mod monitor;

pub use monitor::MonitorJob;
