use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid expected address: {0}")]
    InvalidExpectedAddress(String),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("No name servers configured")]
    NoServers,

    #[error("Query timeout after {0}ms")]
    QueryTimeout(u64),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Reporter unavailable: {0}")]
    SinkUnavailable(String),
}
