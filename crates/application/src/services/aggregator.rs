use super::resolver_client::Attempt;
use dns_status_domain::{AggregateReport, NameserverTarget, QueryDescriptor, ReportEntry};
use std::time::Duration;
use tracing::warn;

/// Collects attempts as they arrive, in any order, into write-once slots
/// indexed by target position, and emits them in declaration order.
pub struct ResultAggregator {
    descriptor: QueryDescriptor,
    targets: Vec<NameserverTarget>,
    slots: Vec<Option<Attempt>>,
}

impl ResultAggregator {
    pub fn new(descriptor: QueryDescriptor, targets: Vec<NameserverTarget>) -> Self {
        let slots = vec![None; targets.len()];
        Self {
            descriptor,
            targets,
            slots,
        }
    }

    /// Stores the attempt for target `index`. A slot is written at most once;
    /// later writes and unknown indices are ignored and reported as `false`.
    pub fn record(&mut self, index: usize, attempt: Attempt) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(attempt);
                true
            }
            Some(Some(_)) => {
                warn!(index, "Outcome already recorded for target, ignoring");
                false
            }
            None => {
                warn!(index, targets = self.targets.len(), "Outcome for unknown target");
                false
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.pending() == 0
    }

    /// Builds the report. Targets that never reported are the ones still in
    /// flight when the wait ended, so they are entered as timed out after
    /// `waited`.
    pub fn finish(self, waited: Duration) -> AggregateReport {
        let entries = self
            .targets
            .into_iter()
            .zip(self.slots)
            .map(|(target, slot)| {
                let attempt = slot.unwrap_or_else(|| Attempt::timed_out(waited));
                ReportEntry {
                    elapsed_ms: attempt.elapsed_ms(),
                    outcome: attempt.outcome,
                    target,
                }
            })
            .collect();

        AggregateReport {
            descriptor: self.descriptor,
            entries,
        }
    }
}
