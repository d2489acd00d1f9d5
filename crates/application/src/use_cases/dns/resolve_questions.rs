use crate::use_cases::{BuildHostnameMappingUseCase, ResolveFallbackChainUseCase};
use hickory_proto::op::Query;
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record, RecordType};
use name_resolver_domain::{Filter, HostnameIpMapping};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Outcome of looking a question up in the workload mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalAnswer {
    /// Name is mapped and the question asks for its address record.
    Answer(Record),
    /// Name is mapped but the question asks for another record type. Not
    /// forwarded upstream.
    Unsupported(IpAddr),
    NotMapped,
}

/// Strips the trailing root label separator, if present.
pub fn normalize_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

pub struct ResolveQuestionsUseCase {
    mapping: Arc<BuildHostnameMappingUseCase>,
    fallback: Arc<ResolveFallbackChainUseCase>,
    filter: Arc<Filter>,
    local_ttl: u32,
}

impl ResolveQuestionsUseCase {
    pub fn new(
        mapping: Arc<BuildHostnameMappingUseCase>,
        fallback: Arc<ResolveFallbackChainUseCase>,
        filter: Arc<Filter>,
    ) -> Self {
        Self {
            mapping,
            fallback,
            filter,
            local_ttl: 0,
        }
    }

    pub fn with_local_ttl(mut self, ttl: u32) -> Self {
        self.local_ttl = ttl;
        self
    }

    /// Resolves every question of one request. Answers are concatenated in
    /// question order. Never fails: an unreachable inventory degrades to an
    /// empty mapping and unresolved names contribute no answers.
    pub async fn execute(&self, queries: &[Query]) -> Vec<Record> {
        let mut answers = Vec::new();
        self.execute_into(queries, &mut answers).await;
        answers
    }

    /// Same as [`execute`](Self::execute), but appends each question's answers
    /// to `answers` as soon as they are known. If the future is dropped midway,
    /// `answers` keeps everything resolved up to that point.
    pub async fn execute_into(&self, queries: &[Query], answers: &mut Vec<Record>) {
        if queries.is_empty() {
            return;
        }

        let mapping = match self.mapping.execute(&self.filter).await {
            Ok(mapping) => mapping,
            Err(e) => {
                error!(error = %e, "Failed to get container mapping");
                HostnameIpMapping::new()
            }
        };

        self.resolve_with_mapping(&mapping, queries, answers).await;
    }

    pub async fn resolve_with_mapping(
        &self,
        mapping: &HostnameIpMapping,
        queries: &[Query],
        answers: &mut Vec<Record>,
    ) {
        for query in queries {
            debug!(name = %query.name(), qtype = %query.query_type(), "Resolving question");

            match self.lookup_local(mapping, query) {
                LocalAnswer::Answer(record) => {
                    info!(name = %query.name(), record = %record, "Resolved from container mapping");
                    answers.push(record);
                }
                LocalAnswer::Unsupported(address) => {
                    debug!(
                        name = %query.name(),
                        qtype = %query.query_type(),
                        address = %address,
                        "Unsupported query type for mapped name"
                    );
                }
                LocalAnswer::NotMapped => {
                    debug!(name = %query.name(), "No mapping, using fallback DNS");
                    let fallback_answers = self.fallback.execute(query).await;
                    if fallback_answers.is_empty() {
                        info!(name = %query.name(), "Fallback DNS failed to resolve");
                    }
                    answers.extend(fallback_answers);
                }
            }
        }
    }

    pub fn lookup_local(&self, mapping: &HostnameIpMapping, query: &Query) -> LocalAnswer {
        let name = query.name().to_ascii();
        let Some(address) = mapping.get(normalize_name(&name)) else {
            return LocalAnswer::NotMapped;
        };

        let rdata = match (query.query_type(), address) {
            (RecordType::A, IpAddr::V4(v4)) => RData::A(A(v4)),
            (RecordType::AAAA, IpAddr::V6(v6)) => RData::AAAA(AAAA(v6)),
            _ => return LocalAnswer::Unsupported(address),
        };

        LocalAnswer::Answer(Record::from_rdata(
            query.name().clone(),
            self.local_ttl,
            rdata,
        ))
    }
}
