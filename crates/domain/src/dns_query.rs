use super::validators::{parse_ip_address, reverse_lookup_name, validate_domain_name};
use super::{DomainError, RecordType};
use std::fmt;
use std::sync::Arc;

/// What a query asks of each nameserver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ForwardLookup(RecordType),
    ReverseLookup,
    /// Liveness probe; judged on receiving any response, not on its content.
    HealthProbe(RecordType),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ForwardLookup(rt) => write!(f, "lookup {rt}"),
            Operation::ReverseLookup => f.write_str("reverse"),
            Operation::HealthProbe(rt) => write!(f, "probe {rt}"),
        }
    }
}

/// Immutable description of one logical query.
/// Uses `Arc<str>` so fan-out tasks can clone it cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub target: Arc<str>,
    pub operation: Operation,
}

impl QueryDescriptor {
    pub fn forward(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            target: domain.into(),
            operation: Operation::ForwardLookup(record_type),
        }
    }

    pub fn reverse(address: impl Into<Arc<str>>) -> Self {
        Self {
            target: address.into(),
            operation: Operation::ReverseLookup,
        }
    }

    /// Probe a nameserver by asking it for the A record of `probe_domain`.
    pub fn health_probe(probe_domain: impl Into<Arc<str>>) -> Self {
        Self {
            target: probe_domain.into(),
            operation: Operation::HealthProbe(RecordType::A),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match &self.operation {
            Operation::ForwardLookup(rt) | Operation::HealthProbe(rt) => rt.clone(),
            Operation::ReverseLookup => RecordType::PTR,
        }
    }

    /// Validates the target and returns the name actually sent on the wire.
    ///
    /// This runs before anything is dispatched; a failure here means the
    /// caller supplied bad input.
    pub fn question_name(&self) -> Result<String, DomainError> {
        match self.operation {
            Operation::ReverseLookup => {
                let ip = parse_ip_address(&self.target)?;
                Ok(reverse_lookup_name(&ip))
            }
            Operation::ForwardLookup(_) | Operation::HealthProbe(_) => {
                validate_domain_name(&self.target)?;
                Ok(self.target.to_string())
            }
        }
    }
}
