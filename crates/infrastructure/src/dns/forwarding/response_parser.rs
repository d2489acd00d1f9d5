use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;
use name_resolver_domain::DomainError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,

    pub answers: Vec<Record>,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes an upstream reply and checks it answers the query with `expected_id`.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<DnsResponse, DomainError> {
        let mut message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                message.id(),
                expected_id
            )));
        }

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "message is not a response".to_string(),
            ));
        }

        let rcode = message.response_code();
        let answers = message.take_answers();

        debug!(
            rcode = Self::rcode_to_status(rcode),
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse { rcode, answers })
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
