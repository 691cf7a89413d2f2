use crate::ports::NameserverSource;
use crate::services::{FanOutOptions, FanOutScheduler};
use dns_status_domain::{AggregateReport, QueryDescriptor};
use std::sync::Arc;
use tracing::info;

/// PTR lookup of an IP address against every system nameserver.
///
/// A malformed address never reaches the network; every entry of the report
/// carries `Outcome::InvalidInput`.
pub struct ReverseLookupUseCase {
    scheduler: Arc<FanOutScheduler>,
    nameservers: Arc<dyn NameserverSource>,
    options: FanOutOptions,
}

impl ReverseLookupUseCase {
    pub fn new(
        scheduler: Arc<FanOutScheduler>,
        nameservers: Arc<dyn NameserverSource>,
        options: FanOutOptions,
    ) -> Self {
        Self {
            scheduler,
            nameservers,
            options,
        }
    }

    pub async fn execute(&self, address: &str) -> AggregateReport {
        let descriptor = QueryDescriptor::reverse(address.trim());
        let targets = self.nameservers.nameservers();

        info!(address = %address, nameservers = targets.len(), "Reverse DNS lookup");
        self.scheduler
            .execute(&descriptor, &targets, self.options)
            .await
    }
}
