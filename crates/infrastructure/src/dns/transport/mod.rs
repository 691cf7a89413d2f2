pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dns_status_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Udp,
    Tcp,
}

/// Enum-dispatched transport, stack-allocated with no Box or vtable.
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    /// Send a DNS query via the appropriate protocol (static dispatch).
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    /// Protocol name for logging.
    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

pub fn create_transport(protocol: Protocol, server_addr: SocketAddr) -> Transport {
    match protocol {
        Protocol::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        Protocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}

/// Maps an I/O error to the error kinds the resolver client distinguishes.
pub(crate) fn io_error(action: &str, server: SocketAddr, e: std::io::Error) -> DomainError {
    DomainError::Transport(format!("{action} {server}: {e}"))
}
