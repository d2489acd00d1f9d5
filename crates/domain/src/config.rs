pub mod errors;
pub mod filter;
pub mod inventory;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use filter::FilterConfig;
pub use inventory::InventoryConfig;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
