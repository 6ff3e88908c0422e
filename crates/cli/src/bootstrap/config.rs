use dnswatch_domain::{
    parse_expected_address, parse_server_entry, validate_name, CliOverrides, Config, MonitorConfig,
    MonitorError, DNS_PORT,
};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    Ok(config)
}

/// Turn the raw watch section into a validated `MonitorConfig`.
///
/// Server entries that are not address literals are resolved once, here.
/// The monitor itself never does hostname lookups.
pub async fn build_monitor_config(config: &Config) -> anyhow::Result<MonitorConfig> {
    let watch = &config.watch;

    validate_name(&watch.name)?;
    let expected = parse_expected_address(&watch.expected)?;

    let mut servers = Vec::with_capacity(watch.servers.len());
    for entry in &watch.servers {
        servers.push(resolve_server_entry(entry).await?);
    }

    let monitor = MonitorConfig::new(
        watch.name.as_str(),
        expected,
        servers,
        Duration::from_millis(watch.interval_ms),
        Duration::from_millis(watch.timeout_ms),
    )?
    .with_concurrent(watch.concurrent);

    for warning in monitor.sanity_warnings() {
        warn!("{warning}");
    }

    Ok(monitor)
}

async fn resolve_server_entry(raw: &str) -> Result<SocketAddr, MonitorError> {
    if let Ok(addr) = parse_server_entry(raw) {
        return Ok(addr);
    }

    // Hostname entry: default the port, then resolve
    let candidate = match raw.rsplit_once(':') {
        Some((_, port)) if port.parse::<u16>().is_ok() => raw.to_string(),
        _ => format!("{raw}:{DNS_PORT}"),
    };

    let resolved = tokio::net::lookup_host(candidate.as_str())
        .await
        .map_err(|e| MonitorError::InvalidServerAddress(format!("{raw}: {e}")))?
        .next()
        .ok_or_else(|| MonitorError::InvalidServerAddress(raw.to_string()))?;

    info!(entry = raw, resolved = %resolved, "Resolved server entry");
    Ok(resolved)
}
