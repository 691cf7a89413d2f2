use bytes::Bytes;
use dns_status_domain::DomainError;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{RData, Record, RecordType as HickoryRecordType};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        !matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }

    /// Answers of `query_type` in presentation format, in wire order.
    /// CNAME hops leading to them are not included unless CNAME was asked for.
    pub fn records_of(&self, query_type: HickoryRecordType) -> Vec<String> {
        self.answers
            .iter()
            .filter(|r| r.record_type() == query_type)
            .map(|r| Self::render(r.data()))
            .collect()
    }

    /// Turns the response into the answer list, or the error that the rcode
    /// and answer section stand for.
    pub fn into_records(
        self,
        domain: &str,
        query_type: HickoryRecordType,
    ) -> Result<Vec<String>, DomainError> {
        if self.is_nxdomain() {
            return Err(DomainError::NameNotFound(domain.to_string()));
        }
        if self.is_server_error() {
            return Err(DomainError::ServerFailure(ResponseParser::rcode_to_status(
                self.rcode,
            )));
        }

        let records = self.records_of(query_type);
        if records.is_empty() {
            return Err(DomainError::NoData);
        }
        Ok(records)
    }

    fn render(data: &RData) -> String {
        match data {
            RData::PTR(name) => name.to_utf8().trim_end_matches('.').to_string(),
            RData::CNAME(name) => name.to_utf8().trim_end_matches('.').to_string(),
            RData::NS(name) => name.to_utf8().trim_end_matches('.').to_string(),
            other => other.to_string(),
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a DNS response received from the wire.
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Message is not a response".to_string(),
            ));
        }

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = message.answers().to_vec();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
