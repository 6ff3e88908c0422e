use crate::MonitorError;
use std::net::{IpAddr, SocketAddr};

/// Standard DNS port, applied to server entries that carry no port.
pub const DNS_PORT: u16 = 53;

pub fn validate_name(name: &str) -> Result<(), MonitorError> {
    if name.is_empty() {
        return Err(MonitorError::InvalidDomainName(
            "name cannot be empty".into(),
        ));
    }
    if name.len() > 253 {
        return Err(MonitorError::InvalidDomainName(format!(
            "name exceeds 253 characters: {name}"
        )));
    }
    Ok(())
}

pub fn parse_expected_address(raw: &str) -> Result<IpAddr, MonitorError> {
    raw.parse::<IpAddr>()
        .map_err(|_| MonitorError::InvalidExpectedAddress(raw.to_string()))
}

/// Parse one server entry into a socket address.
///
/// Accepts `ip:port`, `[v6]:port`, a bare IPv4/IPv6 literal (port 53), or a
/// bracketed IPv6 literal without port. Hostnames are not handled here;
/// resolving them needs the network and belongs to startup code.
pub fn parse_server_entry(raw: &str) -> Result<SocketAddr, MonitorError> {
    let raw = raw.trim();
    if let Ok(addr) = raw.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let bare = raw
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .unwrap_or(raw);
    if let Ok(ip) = bare.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DNS_PORT));
    }
    Err(MonitorError::InvalidServerAddress(raw.to_string()))
}
