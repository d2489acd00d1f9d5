use crate::ports::WorkloadInventory;
use name_resolver_domain::{DomainError, Filter, HostnameIpMapping};
use std::sync::Arc;
use tracing::debug;

pub struct BuildHostnameMappingUseCase {
    inventory: Arc<dyn WorkloadInventory>,
}

impl BuildHostnameMappingUseCase {
    pub fn new(inventory: Arc<dyn WorkloadInventory>) -> Self {
        Self { inventory }
    }

    /// Builds the hostname table for one resolution pass.
    ///
    /// Workloads are applied in inventory order, so when two workloads claim
    /// the same name the later one wins. Overrides are applied last.
    pub async fn execute(&self, filter: &Filter) -> Result<HostnameIpMapping, DomainError> {
        let workloads = self.inventory.list_workloads(filter).await?;

        let mut mapping = HostnameIpMapping::new();
        for workload in &workloads {
            for fact in workload.name_facts() {
                if let Some(previous) = mapping.insert_fact(&fact) {
                    if previous != fact.address {
                        debug!(
                            name = %fact.name,
                            previous = %previous,
                            address = %fact.address,
                            source = fact.source.as_str(),
                            workload = %workload.id,
                            "Name already mapped, overwriting"
                        );
                    }
                }
            }
        }

        let applied = mapping.apply_overrides(&filter.overrides);
        if applied < filter.overrides.len() {
            for (alias, canonical) in &filter.overrides {
                if !mapping.contains(canonical) {
                    debug!(alias = %alias, canonical = %canonical, "Override target not running, skipped");
                }
            }
        }

        debug!(
            workloads = workloads.len(),
            names = mapping.len(),
            overrides = applied,
            "Hostname mapping built"
        );

        Ok(mapping)
    }
}
