use super::forwarding::{DnsResponse, MessageBuilder, RecordTypeMapper, ResponseParser};
use super::transport::{create_transport, Protocol};
use async_trait::async_trait;
use bytes::Bytes;
use dns_status_application::ports::ResolverTransport;
use dns_status_domain::{DomainError, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Resolver transport speaking DNS wire format directly to a nameserver.
///
/// Every question goes out over UDP first. A truncated answer is retried
/// over TCP with whatever remains of the attempt's timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireResolverTransport;

impl WireResolverTransport {
    pub fn new() -> Self {
        Self
    }

    async fn exchange(
        protocol: Protocol,
        nameserver: SocketAddr,
        query_id: u16,
        query_bytes: &[u8],
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let transport = create_transport(protocol, nameserver);
        let response = transport.send(query_bytes, timeout).await?;
        let parsed = ResponseParser::parse_bytes(Bytes::from(response.bytes))?;

        if parsed.id != query_id {
            return Err(DomainError::Transport(format!(
                "Response ID mismatch from {} over {}: expected {}, got {}",
                nameserver,
                transport.protocol_name(),
                query_id,
                parsed.id
            )));
        }

        Ok(parsed)
    }
}

#[async_trait]
impl ResolverTransport for WireResolverTransport {
    async fn resolve(
        &self,
        name: &str,
        record_type: &RecordType,
        nameserver: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError> {
        let query_type = RecordTypeMapper::to_hickory(record_type)?;
        let (query_id, query_bytes) = MessageBuilder::build_query_with_id(name, record_type)?;
        let deadline = Instant::now() + timeout;

        let mut response =
            Self::exchange(Protocol::Udp, nameserver, query_id, &query_bytes, timeout).await?;

        if response.truncated {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(DomainError::QueryTimeout);
            }

            debug!(
                server = %nameserver,
                domain = %name,
                remaining_ms = remaining.as_millis() as u64,
                "Truncated UDP response, retrying over TCP"
            );

            response =
                Self::exchange(Protocol::Tcp, nameserver, query_id, &query_bytes, remaining)
                    .await?;
        }

        response.into_records(name, query_type)
    }
}
