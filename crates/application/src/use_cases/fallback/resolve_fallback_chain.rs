use crate::ports::UpstreamExchange;
use hickory_proto::op::Query;
use hickory_proto::rr::Record;
use name_resolver_domain::UpstreamAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Tries upstream resolvers one after another and returns the first
/// non-empty answer set.
pub struct ResolveFallbackChainUseCase {
    exchange: Arc<dyn UpstreamExchange>,
    upstreams: Arc<[UpstreamAddr]>,
    timeout: Duration,
}

impl ResolveFallbackChainUseCase {
    pub fn new(
        exchange: Arc<dyn UpstreamExchange>,
        upstreams: Vec<UpstreamAddr>,
        timeout: Duration,
    ) -> Self {
        Self {
            exchange,
            upstreams: upstreams.into(),
            timeout,
        }
    }

    /// Worst case is `upstreams × timeout`: every exchange is cut off at the
    /// per-exchange timeout even if the transport ignores it.
    pub async fn execute(&self, query: &Query) -> Vec<Record> {
        for (position, upstream) in self.upstreams.iter().enumerate() {
            debug!(
                name = %query.name(),
                qtype = %query.query_type(),
                upstream = %upstream,
                position,
                "Fallback resolving"
            );

            let outcome = tokio::time::timeout(
                self.timeout,
                self.exchange.exchange(query, upstream, self.timeout),
            )
            .await;

            match outcome {
                Err(_) => {
                    debug!(upstream = %upstream, timeout_ms = self.timeout.as_millis() as u64, "Fallback DNS query timed out");
                }
                Ok(Err(e)) => {
                    debug!(upstream = %upstream, error = %e, "Fallback DNS query failed");
                }
                Ok(Ok(answers)) if answers.is_empty() => {
                    debug!(upstream = %upstream, name = %query.name(), "No answer from fallback DNS");
                }
                Ok(Ok(answers)) => {
                    debug!(
                        upstream = %upstream,
                        count = answers.len(),
                        name = %query.name(),
                        "Fallback DNS returned answers"
                    );
                    return answers;
                }
            }
        }

        Vec::new()
    }
}
