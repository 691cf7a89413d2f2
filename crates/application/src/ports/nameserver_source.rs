use async_trait::async_trait;
use dns_status_domain::{DomainError, NameserverTarget};
use std::sync::Arc;

/// The host's own resolver list, used by forward and reverse lookups.
#[async_trait]
pub trait NameserverSource: Send + Sync {
    /// Current snapshot; cheap to call on every query.
    fn nameservers(&self) -> Arc<Vec<NameserverTarget>>;

    /// Re-reads the underlying configuration and returns the new count.
    async fn reload(&self) -> Result<usize, DomainError>;
}
