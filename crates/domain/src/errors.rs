use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("The DNS response does not contain an answer to the question")]
    NoData,

    #[error("The DNS query name does not exist: {0}")]
    NameNotFound(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Server returned {0}")]
    ServerFailure(&'static str),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport error: {0}")]
    Transport(String),
}
