#![allow(dead_code)]

use async_trait::async_trait;
use dnswatch_application::ports::{CheckReporter, RecordAnswer, RecordProber};
use dnswatch_domain::{CheckResult, CheckTarget, MonitorError};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock RecordProber
// ============================================================================

type ScriptedReply = Result<RecordAnswer, MonitorError>;

pub struct MockRecordProber {
    fallback: Arc<RwLock<ScriptedReply>>,
    per_server: Arc<RwLock<HashMap<SocketAddr, ScriptedReply>>>,
    probed: Arc<RwLock<Vec<SocketAddr>>>,
    call_count: Arc<AtomicU64>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockRecordProber {
    /// Every probe answers with an empty NOERROR reply until scripted.
    pub fn new() -> Self {
        Self::with_fallback(Ok(RecordAnswer {
            addresses: Vec::new(),
            rcode: "NOERROR",
        }))
    }

    /// Every probe answers with the given addresses.
    pub fn answering(addresses: Vec<&str>) -> Self {
        let addresses: Vec<IpAddr> = addresses.iter().map(|a| a.parse().unwrap()).collect();
        Self::with_fallback(Ok(RecordAnswer {
            addresses,
            rcode: "NOERROR",
        }))
    }

    fn with_fallback(fallback: ScriptedReply) -> Self {
        Self {
            fallback: Arc::new(RwLock::new(fallback)),
            per_server: Arc::new(RwLock::new(HashMap::new())),
            probed: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            delay: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn set_answer(&self, server: &str, addresses: Vec<&str>) {
        let addresses: Vec<IpAddr> = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.per_server.write().await.insert(
            server.parse().unwrap(),
            Ok(RecordAnswer {
                addresses,
                rcode: "NOERROR",
            }),
        );
    }

    pub async fn set_empty(&self, server: &str, rcode: &'static str) {
        self.per_server.write().await.insert(
            server.parse().unwrap(),
            Ok(RecordAnswer {
                addresses: Vec::new(),
                rcode,
            }),
        );
    }

    pub async fn set_failure(&self, server: &str, error: MonitorError) {
        self.per_server
            .write()
            .await
            .insert(server.parse().unwrap(), Err(error));
    }

    /// Every probe sleeps this long before answering.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Servers in the order they were probed.
    pub async fn probed_servers(&self) -> Vec<SocketAddr> {
        self.probed.read().await.clone()
    }
}

#[async_trait]
impl RecordProber for MockRecordProber {
    async fn probe(&self, target: &CheckTarget) -> Result<RecordAnswer, MonitorError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.probed.write().await.push(target.server);
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reply) = self.per_server.read().await.get(&target.server) {
            return reply.clone();
        }
        self.fallback.read().await.clone()
    }
}

// ============================================================================
// Recording CheckReporter
// ============================================================================

pub struct RecordingReporter {
    results: Arc<RwLock<Vec<CheckResult>>>,
    report_count: Arc<AtomicU64>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            report_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn report_count(&self) -> u64 {
        self.report_count.load(Ordering::Relaxed)
    }

    pub async fn results(&self) -> Vec<CheckResult> {
        self.results.read().await.clone()
    }

    /// Servers in the order their results were reported.
    pub async fn reported_servers(&self) -> Vec<SocketAddr> {
        self.results.read().await.iter().map(|r| r.server).collect()
    }

    pub async fn failure_count(&self) -> u64 {
        self.results
            .read()
            .await
            .iter()
            .filter(|r| r.is_failure())
            .count() as u64
    }
}

#[async_trait]
impl CheckReporter for RecordingReporter {
    async fn report(&self, result: &CheckResult) {
        self.results.write().await.push(result.clone());
        self.report_count.fetch_add(1, Ordering::Relaxed);
    }
}
