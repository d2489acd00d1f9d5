#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use name_resolver_application::ports::{UpstreamExchange, WorkloadInventory};
use name_resolver_domain::{DomainError, Filter, NetworkAttachment, UpstreamAddr, Workload};
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ── inventory ──────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockWorkloadInventory {
    workloads: Arc<Mutex<Vec<Workload>>>,
    error: Arc<Mutex<Option<DomainError>>>,
    seen_filters: Arc<Mutex<Vec<Filter>>>,
}

impl MockWorkloadInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workloads(workloads: Vec<Workload>) -> Self {
        let inventory = Self::new();
        *inventory.workloads.lock().unwrap() = workloads;
        inventory
    }

    pub fn unavailable() -> Self {
        let inventory = Self::new();
        inventory.set_error(DomainError::InventoryUnavailable(
            "connection refused".to_string(),
        ));
        inventory
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> usize {
        self.seen_filters.lock().unwrap().len()
    }

    pub fn last_filter(&self) -> Option<Filter> {
        self.seen_filters.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl WorkloadInventory for MockWorkloadInventory {
    async fn list_workloads(&self, filter: &Filter) -> Result<Vec<Workload>, DomainError> {
        self.seen_filters.lock().unwrap().push(filter.clone());
        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.workloads.lock().unwrap().clone())
    }
}

// ── upstream exchange ──────────────────────────────────────────────────────

#[derive(Clone)]
pub enum MockUpstream {
    Answers(Vec<Record>),
    Empty,
    Fail,
    Hang,
}

#[derive(Clone, Default)]
pub struct MockUpstreamExchange {
    behaviours: Arc<Mutex<HashMap<UpstreamAddr, MockUpstream>>>,
    contacted: Arc<Mutex<Vec<UpstreamAddr>>>,
}

impl MockUpstreamExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, upstream: &UpstreamAddr, behaviour: MockUpstream) {
        self.behaviours
            .lock()
            .unwrap()
            .insert(upstream.clone(), behaviour);
    }

    pub fn contacted(&self) -> Vec<UpstreamAddr> {
        self.contacted.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamExchange for MockUpstreamExchange {
    async fn exchange(
        &self,
        _query: &Query,
        upstream: &UpstreamAddr,
        _timeout: Duration,
    ) -> Result<Vec<Record>, DomainError> {
        self.contacted.lock().unwrap().push(upstream.clone());
        let behaviour = self
            .behaviours
            .lock()
            .unwrap()
            .get(upstream)
            .cloned()
            .unwrap_or(MockUpstream::Fail);

        match behaviour {
            MockUpstream::Answers(records) => Ok(records),
            MockUpstream::Empty => Ok(Vec::new()),
            MockUpstream::Fail => Err(DomainError::TransportError {
                server: upstream.to_string(),
                reason: "connection refused".to_string(),
            }),
            MockUpstream::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
        }
    }
}

// ── builders ───────────────────────────────────────────────────────────────

pub fn upstream(s: &str) -> UpstreamAddr {
    s.parse().unwrap()
}

pub fn query(name: &str, record_type: RecordType) -> Query {
    Query::query(Name::from_ascii(name).unwrap(), record_type)
}

pub fn a_record(name: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(Name::from_ascii(name).unwrap(), 300, RData::A(A(ip)))
}

pub fn aaaa_record(name: &str, ip: Ipv6Addr) -> Record {
    Record::from_rdata(Name::from_ascii(name).unwrap(), 300, RData::AAAA(AAAA(ip)))
}

pub fn container(id: &str, name: &str, ip: &str) -> Workload {
    Workload::new(id)
        .with_name(format!("/{}", name))
        .with_attachment(NetworkAttachment::new("bridge", Some(ip.parse().unwrap())))
}

pub fn record_ip(record: &Record) -> Option<std::net::IpAddr> {
    match record.data() {
        Some(RData::A(a)) => Some(std::net::IpAddr::V4(a.0)),
        Some(RData::AAAA(aaaa)) => Some(std::net::IpAddr::V6(aaaa.0)),
        _ => None,
    }
}
