use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::filter::FilterConfig;
use super::inventory::InventoryConfig;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "name-resolver.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/name-resolver/config.toml";

/// Main configuration structure for the name resolver
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Listener configuration (port, bind address, request deadline)
    pub server: ServerConfig,

    /// Which workloads are visible, plus explicit aliases
    pub filter: FilterConfig,

    /// Fallback resolver chain
    pub upstream: UpstreamConfig,

    /// Container runtime connection
    pub inventory: InventoryConfig,

    /// Answers synthesized from the workload mapping
    pub resolver: ResolverConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. name-resolver.toml in current directory
    /// 3. /etc/name-resolver/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration. List flags replace the
    /// configured list when at least one value was given.
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(name) = overrides.name {
            self.filter.name = Some(name);
        }
        if !overrides.labels.is_empty() {
            self.filter.labels = overrides.labels;
        }
        if !overrides.overrides.is_empty() {
            self.filter.overrides = overrides.overrides;
        }
        if !overrides.fallback_servers.is_empty() {
            self.upstream.servers = overrides.fallback_servers;
        }
        if let Some(host) = overrides.docker_host {
            self.inventory.docker_host = Some(host);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        if self.inventory.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Inventory timeout cannot be 0".to_string(),
            ));
        }

        if self.server.request_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Request timeout cannot be 0".to_string(),
            ));
        }

        self.filter.to_filter()?;
        self.upstream.parse_servers()?;

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub name: Option<String>,
    pub labels: Vec<String>,
    pub overrides: Vec<String>,
    pub fallback_servers: Vec<String>,
    pub docker_host: Option<String>,
}
