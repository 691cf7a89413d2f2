use crate::services::{FanOutOptions, FanOutScheduler};
use dns_status_domain::{AggregateReport, NameserverTarget, QueryDescriptor, RecordType};
use std::sync::Arc;
use tracing::info;

/// Asks a fixed set of public nameservers the same question to spot records
/// that have not propagated everywhere yet.
pub struct PropagationCheckUseCase {
    scheduler: Arc<FanOutScheduler>,
    targets: Vec<NameserverTarget>,
    options: FanOutOptions,
}

impl PropagationCheckUseCase {
    pub fn new(
        scheduler: Arc<FanOutScheduler>,
        targets: Vec<NameserverTarget>,
        options: FanOutOptions,
    ) -> Self {
        Self {
            scheduler,
            targets,
            options,
        }
    }

    pub async fn execute(&self, domain: &str, record_type: RecordType) -> AggregateReport {
        let descriptor = QueryDescriptor::forward(domain, record_type);

        let report = self
            .scheduler
            .execute(&descriptor, &self.targets, self.options)
            .await;

        info!(
            domain = %domain,
            record_type = %descriptor.record_type(),
            answered = report.success_count(),
            nameservers = report.len(),
            distinct_answers = report.distinct_answer_sets(),
            "DNS propagation check"
        );
        report
    }
}
