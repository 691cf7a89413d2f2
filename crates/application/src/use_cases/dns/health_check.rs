use crate::services::{FanOutOptions, FanOutScheduler};
use dns_status_domain::{AggregateReport, NameserverTarget, QueryDescriptor};
use std::sync::Arc;
use tracing::info;

/// Checks that each nameserver answers at all, and how fast.
pub struct HealthCheckUseCase {
    scheduler: Arc<FanOutScheduler>,
    probe_domain: Arc<str>,
    default_servers: Vec<NameserverTarget>,
    options: FanOutOptions,
}

impl HealthCheckUseCase {
    pub fn new(
        scheduler: Arc<FanOutScheduler>,
        probe_domain: impl Into<Arc<str>>,
        default_servers: Vec<NameserverTarget>,
        options: FanOutOptions,
    ) -> Self {
        Self {
            scheduler,
            probe_domain: probe_domain.into(),
            default_servers,
            options,
        }
    }

    /// Probes `servers`, or the configured defaults when none are given.
    pub async fn execute(&self, servers: &[NameserverTarget]) -> AggregateReport {
        let servers = if servers.is_empty() {
            self.default_servers.as_slice()
        } else {
            servers
        };
        let descriptor = QueryDescriptor::health_probe(Arc::clone(&self.probe_domain));

        info!(servers = servers.len(), probe = %self.probe_domain, "DNS health check");
        self.scheduler
            .execute(&descriptor, servers, self.options)
            .await
    }
}
