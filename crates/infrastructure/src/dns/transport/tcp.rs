use super::{io_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use dns_status_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP transport (RFC 1035 §4.2.2: two-byte length prefix).
/// Used when a UDP answer comes back truncated.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let len = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::Transport(format!(
                "DNS message too large for TCP: {} bytes",
                message_bytes.len()
            ))
        })?;

        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| io_error("Failed to connect to", self.server_addr, e))?;

        let mut frame = Vec::with_capacity(message_bytes.len() + 2);
        frame.extend_from_slice(&len.to_be_bytes());
        frame.extend_from_slice(message_bytes);
        stream
            .write_all(&frame)
            .await
            .map_err(|e| io_error("Failed to send TCP query to", self.server_addr, e))?;

        debug!(server = %self.server_addr, bytes_sent = frame.len(), "TCP query sent");

        let mut len_buf = [0u8; 2];
        stream
            .read_exact(&mut len_buf)
            .await
            .map_err(|e| io_error("Failed to read TCP response length from", self.server_addr, e))?;

        let response_len = u16::from_be_bytes(len_buf) as usize;
        let mut response = vec![0u8; response_len];
        stream
            .read_exact(&mut response)
            .await
            .map_err(|e| io_error("Failed to read TCP response from", self.server_addr, e))?;

        debug!(server = %self.server_addr, bytes_received = response_len, "TCP response received");
        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout)??;

        Ok(TransportResponse {
            bytes,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
