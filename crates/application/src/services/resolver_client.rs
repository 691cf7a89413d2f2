use crate::ports::ResolverTransport;
use dns_status_domain::{DomainError, NameserverTarget, Operation, Outcome, QueryDescriptor};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

/// Outcome of one attempt plus the wall-clock time it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub outcome: Outcome,
    pub elapsed: Duration,
}

impl Attempt {
    pub fn timed_out(after: Duration) -> Self {
        Self {
            outcome: Outcome::Timeout,
            elapsed: after,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs exactly one query against exactly one nameserver.
///
/// Every failure is folded into an [`Outcome`]; `execute` itself cannot fail.
pub struct ResolverClient {
    transport: Arc<dyn ResolverTransport>,
}

impl ResolverClient {
    pub fn new(transport: Arc<dyn ResolverTransport>) -> Self {
        Self { transport }
    }

    pub async fn execute(
        &self,
        descriptor: &QueryDescriptor,
        target: &NameserverTarget,
        attempt_timeout: Duration,
    ) -> Attempt {
        self.execute_until(descriptor, target, attempt_timeout, Instant::now() + attempt_timeout)
            .await
    }

    /// Same as [`execute`](Self::execute), but the attempt ends at `deadline`
    /// instead of `attempt_timeout` after the task first runs. The scheduler
    /// hands every target the deadline its own wait is armed with.
    pub async fn execute_until(
        &self,
        descriptor: &QueryDescriptor,
        target: &NameserverTarget,
        attempt_timeout: Duration,
        deadline: Instant,
    ) -> Attempt {
        // Input is checked before anything touches the network.
        let name = match descriptor.question_name() {
            Ok(name) => name,
            Err(e) => {
                debug!(target = %descriptor.target, error = %e, "Rejected before dispatch");
                return Attempt {
                    outcome: Outcome::from(e),
                    elapsed: Duration::ZERO,
                };
            }
        };
        let record_type = descriptor.record_type();
        let is_probe = matches!(descriptor.operation, Operation::HealthProbe(_));

        let start = Instant::now();
        let budget = deadline.saturating_duration_since(start);
        let result = timeout_at(
            deadline,
            self.transport
                .resolve(&name, &record_type, target.address, budget),
        )
        .await;
        let elapsed = start.elapsed();

        let result = match result {
            Ok(result) => result,
            Err(_) => Err(DomainError::QueryTimeout),
        };

        let outcome = match result {
            Ok(records) if records.is_empty() && !is_probe => Outcome::NoData,
            Ok(records) => Outcome::success(records, elapsed.as_secs_f64() * 1000.0),
            // A probe only cares that the nameserver answered, whatever the rcode.
            Err(
                DomainError::NoData | DomainError::NameNotFound(_) | DomainError::ServerFailure(_),
            ) if is_probe => {
                Outcome::success(Vec::new(), elapsed.as_secs_f64() * 1000.0)
            }
            Err(DomainError::QueryTimeout) => {
                debug!(server = %target.address, timeout_ms = attempt_timeout.as_millis() as u64, "Attempt timed out");
                return Attempt::timed_out(attempt_timeout);
            }
            Err(e) => Outcome::from(e),
        };

        debug!(
            server = %target.address,
            label = %target.label,
            name = %name,
            record_type = %record_type,
            outcome = ?outcome.kind(),
            latency_ms = elapsed.as_millis() as u64,
            "Attempt finished"
        );

        Attempt { outcome, elapsed }
    }
}
