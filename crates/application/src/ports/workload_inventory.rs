use async_trait::async_trait;
use name_resolver_domain::{DomainError, Filter, Workload};

#[async_trait]
pub trait WorkloadInventory: Send + Sync {
    /// Running workloads matching every label of the filter and, when set,
    /// its name criterion. Order is the inventory's iteration order.
    async fn list_workloads(&self, filter: &Filter) -> Result<Vec<Workload>, DomainError>;
}
