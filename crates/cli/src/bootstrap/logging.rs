use dnswatch_domain::Config;
use tracing::info;

pub fn init_logging(config: &Config) {
    let level: tracing::Level = config
        .logging
        .level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_target(true)
            .with_level(true)
            .with_max_level(level)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_target(true)
            .with_thread_ids(false)
            .with_level(true)
            .with_max_level(level)
            .with_ansi(true)
            .init();
    }

    info!(level = %level, json = config.logging.json, "Logging initialized");
}
