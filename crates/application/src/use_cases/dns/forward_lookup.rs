use crate::ports::NameserverSource;
use crate::services::{FanOutOptions, FanOutScheduler};
use dns_status_domain::{AggregateReport, QueryDescriptor, RecordType};
use std::sync::Arc;
use tracing::info;

/// Looks a name up against every system nameserver.
pub struct ForwardLookupUseCase {
    scheduler: Arc<FanOutScheduler>,
    nameservers: Arc<dyn NameserverSource>,
    options: FanOutOptions,
}

impl ForwardLookupUseCase {
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

    pub async fn execute(&self, domain: &str, record_type: RecordType) -> AggregateReport {
        let descriptor = QueryDescriptor::forward(domain, record_type);
        let targets = self.nameservers.nameservers();

        info!(domain = %domain, record_type = %descriptor.record_type(), nameservers = targets.len(), "DNS lookup");
        self.scheduler
            .execute(&descriptor, &targets, self.options)
            .await
    }
}
