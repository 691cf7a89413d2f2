use dns_status_domain::{DomainError, RecordType};
use hickory_proto::rr::RecordType as HickoryRecordType;
use std::str::FromStr;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    ///
    /// Types without a dedicated variant are handed to hickory's own parser;
    /// names it does not know are rejected here.
    pub fn to_hickory(record_type: &RecordType) -> Result<HickoryRecordType, DomainError> {
        Ok(match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::Other(name) => HickoryRecordType::from_str(name)
                .map_err(|_| DomainError::UnsupportedRecordType(name.to_string()))?,
        })
    }
}
