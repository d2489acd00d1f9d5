use crate::dns::forwarding::MessageBuilder;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use name_resolver_application::use_cases::ResolveQuestionsUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Payload limit for clients that do not advertise EDNS(0).
pub const DEFAULT_UDP_PAYLOAD: u16 = 512;

/// Payload size advertised in our own OPT record.
pub const ADVERTISED_UDP_PAYLOAD: u16 = 4096;

pub struct DnsServerHandler {
    use_case: Arc<ResolveQuestionsUseCase>,
    request_timeout: Duration,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQuestionsUseCase>, request_timeout: Duration) -> Self {
        Self {
            use_case,
            request_timeout,
        }
    }

    /// Handles one datagram and returns the encoded reply, or `None` when the
    /// datagram is dropped without a reply.
    pub async fn handle_raw_udp(&self, query_buf: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(query_buf) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        if request.message_type() != MessageType::Query || request.op_code() != OpCode::Query {
            debug!(
                client = %client,
                message_type = ?request.message_type(),
                op_code = ?request.op_code(),
                "Dropping non-query message"
            );
            return None;
        }

        info!(client = %client, questions = request.queries().len(), "Received DNS query");

        let mut answers = Vec::new();
        if tokio::time::timeout(
            self.request_timeout,
            self.use_case.execute_into(request.queries(), &mut answers),
        )
        .await
        .is_err()
        {
            warn!(
                client = %client,
                timeout_ms = self.request_timeout.as_millis() as u64,
                answers = answers.len(),
                "Request deadline exceeded, replying with answers resolved so far"
            );
        }

        debug!(client = %client, answers = answers.len(), "Sending response");

        let reply = build_reply(&request, answers);
        match encode_reply(reply, max_payload(&request)) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(client = %client, error = %e, "Failed to encode DNS response");
                None
            }
        }
    }
}

/// Builds a NOERROR reply echoing the request's id, opcode, RD/CD flags and
/// question section.
pub fn build_reply(request: &Message, answers: Vec<Record>) -> Message {
    let mut reply = Message::new();
    reply
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_checking_disabled(request.checking_disabled())
        .set_recursion_available(true)
        .set_response_code(ResponseCode::NoError)
        .add_queries(request.queries().to_vec())
        .add_answers(answers);

    if request.extensions().is_some() {
        let mut edns = Edns::new();
        edns.set_max_payload(ADVERTISED_UDP_PAYLOAD);
        reply.set_edns(edns);
    }

    reply
}

/// UDP payload size the client can accept.
pub fn max_payload(request: &Message) -> usize {
    request
        .extensions()
        .as_ref()
        .map(|edns| edns.max_payload().max(DEFAULT_UDP_PAYLOAD))
        .unwrap_or(DEFAULT_UDP_PAYLOAD) as usize
}

/// Encodes the reply; if it exceeds `limit` the answers are dropped and TC is set.
pub fn encode_reply(
    mut reply: Message,
    limit: usize,
) -> Result<Vec<u8>, name_resolver_domain::DomainError> {
    let bytes = MessageBuilder::serialize_message(&reply)?;
    if bytes.len() <= limit {
        return Ok(bytes);
    }

    debug!(size = bytes.len(), limit = limit, "Response too large, truncating");
    reply.take_answers();
    reply.set_truncated(true);
    MessageBuilder::serialize_message(&reply)
}
