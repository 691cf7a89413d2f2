use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// DNS record type requested by a lookup.
///
/// Well-known types get their own variant. Anything else is carried verbatim
/// (upper-cased) in `Other` so the resolution layer decides whether it is
/// acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RecordType {
    #[default]
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    NS,
    PTR,
    SOA,
    SRV,
    CAA,
    Other(Arc<str>),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
            RecordType::SOA => "SOA",
            RecordType::SRV => "SRV",
            RecordType::CAA => "CAA",
            RecordType::Other(name) => name,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper.is_empty() {
            return Err(DomainError::UnsupportedRecordType(s.to_string()));
        }

        Ok(match upper.as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "MX" => RecordType::MX,
            "TXT" => RecordType::TXT,
            "NS" => RecordType::NS,
            "PTR" => RecordType::PTR,
            "SOA" => RecordType::SOA,
            "SRV" => RecordType::SRV,
            "CAA" => RecordType::CAA,
            _ => RecordType::Other(Arc::from(upper.as_str())),
        })
    }
}
