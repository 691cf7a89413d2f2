//! DNS Status Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod nameserver;
pub mod outcome;
pub mod report;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{Operation, QueryDescriptor};
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use nameserver::NameserverTarget;
pub use outcome::{Outcome, OutcomeKind};
pub use report::{AggregateReport, ReportEntry};
