use crate::ports::NameserverSource;
use dns_status_domain::DomainError;
use std::sync::Arc;
use tracing::info;

/// Resets resolver state. No answers are cached, so this only re-reads the
/// system nameserver list.
pub struct FlushCacheUseCase {
    nameservers: Arc<dyn NameserverSource>,
}

impl FlushCacheUseCase {
    pub fn new(nameservers: Arc<dyn NameserverSource>) -> Self {
        Self { nameservers }
    }

    pub async fn execute(&self) -> Result<usize, DomainError> {
        let count = self.nameservers.reload().await?;
        info!(nameservers = count, "Resolver state flushed");
        Ok(count)
    }
}
