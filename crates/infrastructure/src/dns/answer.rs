use dnswatch_domain::MonitorError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

/// The slice of a DNS response the monitor cares about.
#[derive(Debug, Clone)]
pub struct ParsedAnswer {
    pub id: u16,

    /// A and AAAA records from the answer section, in wire order. Other
    /// record types (CNAME hops included) are skipped, not errors.
    pub addresses: Vec<IpAddr>,

    pub rcode: ResponseCode,

    pub truncated: bool,
}

impl ParsedAnswer {
    /// Response code as the text operators know from dig output.
    pub fn rcode_text(&self) -> &'static str {
        match self.rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

pub struct AnswerParser;

impl AnswerParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedAnswer, MonitorError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            MonitorError::InvalidDnsResponse(format!("Failed to parse DNS response: {e}"))
        })?;

        let mut addresses = Vec::new();
        for record in message.answers() {
            match record.data() {
                RData::A(a) => addresses.push(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => addresses.push(IpAddr::V6(aaaa.0)),
                _ => {}
            }
        }

        let parsed = ParsedAnswer {
            id: message.id(),
            addresses,
            rcode: message.response_code(),
            truncated: message.truncated(),
        };

        debug!(
            answers = parsed.addresses.len(),
            rcode = parsed.rcode_text(),
            truncated = parsed.truncated,
            "DNS answer parsed"
        );

        Ok(parsed)
    }
}
