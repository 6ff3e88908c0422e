use super::answer::AnswerParser;
use super::query::QueryBuilder;
use super::transport::UdpExchange;
use async_trait::async_trait;
use dnswatch_application::ports::{RecordAnswer, RecordProber};
use dnswatch_domain::{CheckTarget, MonitorError};
use tracing::warn;

/// `RecordProber` over plain UDP.
///
/// Build, exchange, parse. A response whose ID does not match the query is
/// rejected as invalid. A truncated response is still classified from the
/// records that fit; there is no TCP retry.
pub struct UdpRecordProber;

impl UdpRecordProber {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UdpRecordProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordProber for UdpRecordProber {
    async fn probe(&self, target: &CheckTarget) -> Result<RecordAnswer, MonitorError> {
        let (id, query_bytes) = QueryBuilder::build_address_query(target)?;

        let reply = UdpExchange::send(target.server, &query_bytes, target.timeout).await?;

        let parsed = AnswerParser::parse(&reply)?;

        if parsed.id != id {
            return Err(MonitorError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                parsed.id, id
            )));
        }

        if parsed.truncated {
            warn!(server = %target.server, "UDP response truncated");
        }

        let rcode = parsed.rcode_text();
        Ok(RecordAnswer {
            addresses: parsed.addresses,
            rcode,
        })
    }
}
