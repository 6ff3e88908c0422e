use dnswatch_domain::MonitorError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Reply buffer size; fits EDNS(0) payloads without reallocation
const MAX_REPLY_BYTES: usize = 4096;

/// One-shot DNS over UDP exchange.
///
/// Every call binds a fresh ephemeral socket, sends one datagram and waits
/// for one reply. No pooling and no retransmission: a lost packet surfaces
/// as a timeout and the next tick tries again from scratch.
pub struct UdpExchange;

impl UdpExchange {
    /// Send `query_bytes` to `server` and return the raw reply.
    ///
    /// `timeout` is one deadline over the whole exchange, bind to receive.
    pub async fn send(
        server: SocketAddr,
        query_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, MonitorError> {
        match tokio::time::timeout(timeout, Self::exchange(server, query_bytes)).await {
            Ok(result) => result,
            Err(_) => Err(MonitorError::QueryTimeout(timeout.as_millis() as u64)),
        }
    }

    async fn exchange(server: SocketAddr, query_bytes: &[u8]) -> Result<Vec<u8>, MonitorError> {
        // Bind to ephemeral port in the server's address family
        let bind_addr: SocketAddr = if server.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| MonitorError::IoError(format!("Failed to bind UDP socket: {e}")))?;

        let sent = socket.send_to(query_bytes, server).await.map_err(|e| {
            MonitorError::IoError(format!("Failed to send UDP query to {server}: {e}"))
        })?;
        debug!(server = %server, bytes = sent, "Query datagram sent");

        let mut reply = vec![0u8; MAX_REPLY_BYTES];
        let (received, from_addr) = socket.recv_from(&mut reply).await.map_err(|e| {
            MonitorError::IoError(format!("Failed to receive UDP response from {server}: {e}"))
        })?;

        // A reply from another address is suspicious but still usable;
        // the message ID check upstream decides
        if from_addr.ip() != server.ip() {
            warn!(
                queried = %server,
                replied = %from_addr,
                "Reply arrived from a different address"
            );
        }

        reply.truncate(received);
        debug!(server = %server, bytes = received, "Reply received");

        Ok(reply)
    }
}
