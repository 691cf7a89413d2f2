use super::DomainError;

/// Result of one query against one nameserver.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success { records: Vec<String>, latency_ms: f64 },
    /// The name exists but has no records of the requested type.
    NoData,
    /// Authoritative "name does not exist".
    NameNotFound,
    /// No response within the per-attempt timeout.
    Timeout,
    /// Caller-supplied target was malformed; nothing was sent.
    InvalidInput { message: String },
    TransportError { message: String },
}

/// Discriminant of [`Outcome`] without payload, for comparisons and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Success,
    NoData,
    NameNotFound,
    Timeout,
    InvalidInput,
    TransportError,
}

impl Outcome {
    pub fn success(records: Vec<String>, latency_ms: f64) -> Self {
        Outcome::Success {
            records,
            latency_ms,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Outcome::TransportError {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success { .. } => OutcomeKind::Success,
            Outcome::NoData => OutcomeKind::NoData,
            Outcome::NameNotFound => OutcomeKind::NameNotFound,
            Outcome::Timeout => OutcomeKind::Timeout,
            Outcome::InvalidInput { .. } => OutcomeKind::InvalidInput,
            Outcome::TransportError { .. } => OutcomeKind::TransportError,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn records(&self) -> Option<&[String]> {
        match self {
            Outcome::Success { records, .. } => Some(records),
            _ => None,
        }
    }
}

impl From<DomainError> for Outcome {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NoData => Outcome::NoData,
            DomainError::NameNotFound(_) => Outcome::NameNotFound,
            DomainError::QueryTimeout => Outcome::Timeout,
            DomainError::InvalidDomainName(_) | DomainError::InvalidIpAddress(_) => {
                Outcome::InvalidInput {
                    message: error.to_string(),
                }
            }
            other => Outcome::transport(other.to_string()),
        }
    }
}
