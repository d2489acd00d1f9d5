#![allow(dead_code, unused_imports)]

mod dns_server_mock;
mod docker_api_mock;

pub use dns_server_mock::{MockBehaviour, MockDnsServer};
pub use docker_api_mock::MockDockerApi;

use async_trait::async_trait;
use name_resolver_application::ports::WorkloadInventory;
use name_resolver_domain::{DomainError, Filter, NetworkAttachment, Workload};

/// Inventory returning a fixed set of workloads, or always failing.
pub struct StaticInventory {
    workloads: Result<Vec<Workload>, DomainError>,
}

impl StaticInventory {
    pub fn new(workloads: Vec<Workload>) -> Self {
        Self {
            workloads: Ok(workloads),
        }
    }

    pub fn failing() -> Self {
        Self {
            workloads: Err(DomainError::InventoryUnavailable(
                "daemon not running".to_string(),
            )),
        }
    }
}

#[async_trait]
impl WorkloadInventory for StaticInventory {
    async fn list_workloads(&self, _filter: &Filter) -> Result<Vec<Workload>, DomainError> {
        self.workloads.clone()
    }
}

pub fn container(id: &str, name: &str, ip: &str) -> Workload {
    Workload::new(id)
        .with_name(format!("/{}", name))
        .with_attachment(NetworkAttachment::new("bridge", Some(ip.parse().unwrap())))
}
