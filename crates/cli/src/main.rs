//! # dnswatch
//!
//! Fixed-cadence DNS answer monitor: asks every configured server for one
//! name, verifies each answer against the expected address, and reports the
//! verdicts to the log or to statsd.

mod bootstrap;

use clap::{CommandFactory, Parser};
use dnswatch_application::ports::CheckReporter;
use dnswatch_application::use_cases::{SweepUseCase, VerifyRecordUseCase};
use dnswatch_domain::CliOverrides;
use dnswatch_infrastructure::dns::UdpRecordProber;
use dnswatch_infrastructure::reporting::{LogReporter, StatsdReporter};
use dnswatch_jobs::MonitorJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "dnswatch")]
#[command(version)]
#[command(about = "Watches DNS answers for one name at a fixed cadence")]
struct Cli {
    /// Domain name whose record is verified
    #[arg(short = 'n', long, env = "DNSWATCH_NAME")]
    name: Option<String>,

    /// Address every answer must carry (IPv4 or IPv6)
    #[arg(short = 'e', long, env = "DNSWATCH_EXPECTED")]
    expected: Option<String>,

    /// Name servers to check: IP, IP:port or hostname, comma separated
    #[arg(short = 's', long, env = "DNSWATCH_SERVERS", value_delimiter = ',')]
    servers: Vec<String>,

    /// Milliseconds between sweeps (default: 500)
    #[arg(long, env = "DNSWATCH_INTERVAL_MS")]
    interval_ms: Option<u64>,

    /// Per-check timeout in milliseconds (default: 5000)
    #[arg(long, env = "DNSWATCH_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Check all servers at once instead of one after another
    #[arg(long, env = "DNSWATCH_CONCURRENT")]
    concurrent: bool,

    /// statsd collector, host or host:port; switches reporting to metrics
    #[arg(long, env = "DNSWATCH_STATSD")]
    statsd: Option<String>,

    /// Metric name prefix (default: dnswatch)
    #[arg(long, env = "DNSWATCH_STATSD_PREFIX")]
    statsd_prefix: Option<String>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Log level filter: trace, debug, info, warn, error (default: info)
    #[arg(long, env = "DNSWATCH_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit one JSON object per log line
    #[arg(long, env = "DNSWATCH_LOG_JSON")]
    log_json: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            name: self.name.clone(),
            expected: self.expected.clone(),
            servers: if self.servers.is_empty() {
                None
            } else {
                Some(self.servers.clone())
            },
            interval_ms: self.interval_ms,
            timeout_ms: self.timeout_ms,
            concurrent: self.concurrent,
            statsd_host: self.statsd.clone(),
            statsd_prefix: self.statsd_prefix.clone(),
            log_level: self.log_level.clone(),
            log_json: self.log_json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    // Incomplete settings are a usage problem, not a failure: show help
    // and leave with a clean exit code, matching what --help does
    let missing = config.missing_required();
    if !missing.is_empty() {
        eprintln!("Missing required settings: {}\n", missing.join(", "));
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("none"),
        "dnswatch starting"
    );

    let monitor = bootstrap::build_monitor_config(&config).await?;

    info!(
        name = %monitor.name,
        expected = %monitor.expected,
        servers = monitor.servers.len(),
        interval_ms = monitor.interval.as_millis() as u64,
        timeout_ms = monitor.timeout.as_millis() as u64,
        concurrent = monitor.concurrent,
        "Monitor configured"
    );

    let reporter: Arc<dyn CheckReporter> = match &config.statsd {
        Some(statsd) => {
            Arc::new(StatsdReporter::connect(&statsd.host, statsd.prefix.clone()).await?)
        }
        None => Arc::new(LogReporter::new()),
    };

    let verify = Arc::new(VerifyRecordUseCase::new(Arc::new(UdpRecordProber::new())));
    let interval = monitor.interval;
    let sweep = Arc::new(SweepUseCase::new(verify, reporter, monitor));

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, stopping monitor");
            signal_token.cancel();
        }
    });

    let job = Arc::new(MonitorJob::new(sweep, interval).with_cancellation(shutdown));
    job.start().await?;

    info!("dnswatch stopped");
    Ok(())
}
