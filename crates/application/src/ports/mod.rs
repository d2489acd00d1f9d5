mod upstream_exchange;
mod workload_inventory;

pub use upstream_exchange::UpstreamExchange;
pub use workload_inventory::WorkloadInventory;

// Re-export for convenience
pub use name_resolver_domain::{Filter, UpstreamAddr, Workload};
