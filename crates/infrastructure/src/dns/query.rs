//! DNS Query Builder
//!
//! Constructs address queries in wire format using `hickory-proto`, giving
//! full control over the ID, flags and question section.

use dnswatch_domain::{CheckTarget, MonitorError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::IpAddr;
use std::str::FromStr;

/// Builds address queries in wire format
pub struct QueryBuilder;

impl QueryBuilder {
    /// Build one recursive address query and serialize it.
    ///
    /// The record type follows the family of the expected address: an IPv4
    /// expectation asks for A, an IPv6 one for AAAA. The name is always sent
    /// fully qualified; a missing root label is appended so resolution never
    /// falls into search-list expansion.
    ///
    /// Returns the message ID alongside the bytes so the caller can match
    /// the response to this query.
    pub fn build_address_query(target: &CheckTarget) -> Result<(u16, Vec<u8>), MonitorError> {
        let name = Self::parse_fqdn(&target.name)?;

        let record_type = match target.expected {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::AAAA,
        };

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(record_type);
        query.set_query_class(hickory_proto::rr::DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn parse_fqdn(raw: &str) -> Result<Name, MonitorError> {
        let fqdn = if raw.ends_with('.') {
            raw.to_string()
        } else {
            format!("{raw}.")
        };
        Name::from_str(&fqdn)
            .map_err(|e| MonitorError::InvalidDomainName(format!("Invalid domain '{raw}': {e}")))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, MonitorError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            MonitorError::InvalidDomainName(format!("Failed to serialize DNS query: {e}"))
        })?;

        Ok(buf)
    }
}
