//! Name Resolver Domain Layer
pub mod config;
pub mod errors;
pub mod filter;
pub mod hostname_mapping;
pub mod upstream;
pub mod workload;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use filter::{Filter, HostOverride};
pub use hostname_mapping::HostnameIpMapping;
pub use upstream::UpstreamAddr;
pub use workload::{NameFact, NameSource, NetworkAttachment, Workload};
