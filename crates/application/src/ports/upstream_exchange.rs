use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::Record;
use name_resolver_domain::{DomainError, UpstreamAddr};
use std::time::Duration;

#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    /// Sends `query` to `upstream` as a single request/response exchange and
    /// returns the answer section of the reply, which may be empty.
    async fn exchange(
        &self,
        query: &Query,
        upstream: &UpstreamAddr,
        timeout: Duration,
    ) -> Result<Vec<Record>, DomainError>;
}
