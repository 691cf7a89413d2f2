use async_trait::async_trait;
use dns_status_domain::{DomainError, RecordType};
use std::net::SocketAddr;
use std::time::Duration;

/// Sends a single DNS question to one specific nameserver.
///
/// Implementations return the answer records rendered as text, or one of:
/// - `DomainError::NoData` when the name exists without records of that type
/// - `DomainError::NameNotFound` for NXDOMAIN
/// - `DomainError::QueryTimeout` when nothing arrived within `timeout`
/// - any other variant for transport or protocol failures
#[async_trait]
pub trait ResolverTransport: Send + Sync {
    async fn resolve(
        &self,
        name: &str,
        record_type: &RecordType,
        nameserver: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError>;
}
