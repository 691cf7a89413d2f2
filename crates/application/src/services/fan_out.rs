use super::aggregator::ResultAggregator;
use super::resolver_client::{Attempt, ResolverClient};
use dns_status_domain::{AggregateReport, NameserverTarget, Outcome, QueryDescriptor};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(3);

/// Timing bounds for one fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOutOptions {
    /// Bound on each individual attempt.
    pub attempt_timeout: Duration,
    /// Bound on the whole fan-out; never below `attempt_timeout`.
    pub ceiling: Option<Duration>,
}

impl FanOutOptions {
    pub fn new(attempt_timeout: Duration) -> Self {
        Self {
            attempt_timeout,
            ceiling: None,
        }
    }

    pub fn with_ceiling(mut self, ceiling: Option<Duration>) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn effective_ceiling(&self) -> Duration {
        self.ceiling
            .unwrap_or(self.attempt_timeout)
            .max(self.attempt_timeout)
    }
}

impl Default for FanOutOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPT_TIMEOUT)
    }
}

/// Sends one query to every target concurrently and waits for all of them.
///
/// Each target runs in its own task with its own timeout, so total wall time
/// is the slowest attempt, not the sum. A task that fails or panics only
/// affects its own entry.
pub struct FanOutScheduler {
    client: Arc<ResolverClient>,
}

impl FanOutScheduler {
    pub fn new(client: Arc<ResolverClient>) -> Self {
        Self { client }
    }

    pub async fn execute(
        &self,
        descriptor: &QueryDescriptor,
        targets: &[NameserverTarget],
        options: FanOutOptions,
    ) -> AggregateReport {
        if targets.is_empty() {
            return AggregateReport::empty(descriptor.clone());
        }
        let mut aggregator = ResultAggregator::new(descriptor.clone(), targets.to_vec());

        let ceiling = options.effective_ceiling();
        debug!(
            targets = targets.len(),
            query = %descriptor.operation,
            target = %descriptor.target,
            timeout_ms = options.attempt_timeout.as_millis() as u64,
            ceiling_ms = ceiling.as_millis() as u64,
            "Fanning out query"
        );

        // Attempt deadlines and the ceiling are measured from the same instant.
        let start = Instant::now();
        let attempt_deadline = start + options.attempt_timeout;
        let mut abort_handles = Vec::with_capacity(targets.len());
        let mut futs = FuturesUnordered::new();

        for (index, target) in targets.iter().enumerate() {
            let client = Arc::clone(&self.client);
            let descriptor = descriptor.clone();
            let target = target.clone();
            let attempt_timeout = options.attempt_timeout;

            let handle = tokio::spawn(async move {
                client
                    .execute_until(&descriptor, &target, attempt_timeout, attempt_deadline)
                    .await
            });
            abort_handles.push(handle.abort_handle());
            futs.push(async move { (index, handle.await) });
        }

        let deadline = sleep_until(start + ceiling);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                biased;
                next = futs.next() => match next {
                    Some((index, Ok(attempt))) => {
                        aggregator.record(index, attempt);
                        if aggregator.is_complete() {
                            break;
                        }
                    }
                    Some((index, Err(e))) => {
                        warn!(index, error = %e, "Resolver task failed");
                        aggregator.record(
                            index,
                            Attempt {
                                outcome: Outcome::transport(format!("resolver task failed: {e}")),
                                elapsed: start.elapsed(),
                            },
                        );
                    }
                    None => break,
                },
                _ = &mut deadline => {
                    warn!(
                        pending = aggregator.pending(),
                        ceiling_ms = ceiling.as_millis() as u64,
                        "Fan-out ceiling reached"
                    );
                    break;
                }
            }
        }

        for handle in &abort_handles {
            handle.abort();
        }

        let report = aggregator.finish(ceiling);
        debug!(
            entries = report.len(),
            answered = report.success_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fan-out complete"
        );
        report
    }
}
