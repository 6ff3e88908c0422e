pub mod config;
pub mod logging;

pub use config::{build_monitor_config, load_config};
pub use logging::init_logging;
