use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::UdpTransport;
use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::Record;
use name_resolver_application::ports::UpstreamExchange;
use name_resolver_domain::{DomainError, UpstreamAddr};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Forwards single questions to upstream resolvers over UDP.
#[derive(Debug, Default, Clone)]
pub struct UdpUpstreamExchange;

impl UdpUpstreamExchange {
    pub fn new() -> Self {
        Self
    }

    async fn resolve_addr(
        upstream: &UpstreamAddr,
        timeout: Duration,
    ) -> Result<SocketAddr, DomainError> {
        let (hostname, port) = match upstream {
            UpstreamAddr::Resolved(addr) => return Ok(*addr),
            UpstreamAddr::Unresolved { hostname, port } => (hostname.as_ref(), *port),
        };

        let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host((hostname, port)))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: upstream.to_string(),
            })?
            .map_err(|e| DomainError::TransportError {
                server: upstream.to_string(),
                reason: format!("failed to resolve upstream hostname: {}", e),
            })?;

        let addr = addrs.next().ok_or_else(|| DomainError::TransportError {
            server: upstream.to_string(),
            reason: "upstream hostname resolved to no addresses".to_string(),
        })?;

        debug!(upstream = %upstream, resolved = %addr, "Resolved upstream hostname");
        Ok(addr)
    }
}

#[async_trait]
impl UpstreamExchange for UdpUpstreamExchange {
    async fn exchange(
        &self,
        query: &Query,
        upstream: &UpstreamAddr,
        timeout: Duration,
    ) -> Result<Vec<Record>, DomainError> {
        let started = Instant::now();
        let server_addr = Self::resolve_addr(upstream, timeout).await?;
        let remaining = timeout.saturating_sub(started.elapsed());

        let (id, bytes) = MessageBuilder::build_query_with_id(query)?;
        let transport = UdpTransport::new(server_addr);
        let response = transport.send(&bytes, remaining).await?;
        let parsed = ResponseParser::parse(&response, id)?;

        debug!(
            upstream = %upstream,
            rcode = ResponseParser::rcode_to_status(parsed.rcode),
            answers = parsed.answers.len(),
            "Upstream exchange completed"
        );

        Ok(parsed.answers)
    }
}
