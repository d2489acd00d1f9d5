use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Invalid upstream address: {0}")]
    InvalidUpstream(String),

    #[error("Invalid host override: {0}")]
    InvalidOverride(String),

    #[error("Workload inventory unavailable: {0}")]
    InventoryUnavailable(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },
}
