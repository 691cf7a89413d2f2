use super::{NameserverTarget, Outcome, OutcomeKind, QueryDescriptor};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub target: NameserverTarget,
    pub outcome: Outcome,
    /// Wall-clock time of the attempt; the timeout value when none arrived.
    pub elapsed_ms: f64,
}

/// One entry per requested target, in target declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateReport {
    pub descriptor: QueryDescriptor,
    pub entries: Vec<ReportEntry>,
}

impl AggregateReport {
    pub fn empty(descriptor: QueryDescriptor) -> Self {
        Self {
            descriptor,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_success())
            .count()
    }

    pub fn outcome_kinds(&self) -> Vec<OutcomeKind> {
        self.entries.iter().map(|e| e.outcome.kind()).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.target.label.as_ref()).collect()
    }

    /// Number of different answer sets among successful entries.
    /// Record order inside an answer does not matter.
    pub fn distinct_answer_sets(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.records())
            .map(|records| records.iter().cloned().collect::<BTreeSet<_>>())
            .collect::<BTreeSet<_>>()
            .len()
    }
}
