use super::errors::ConfigError;
use crate::upstream::DEFAULT_FALLBACK_SERVERS;
use crate::UpstreamAddr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Fallback resolvers, tried in order.
    pub servers: Vec<String>,

    /// Per-exchange timeout.
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            servers: DEFAULT_FALLBACK_SERVERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            timeout_ms: 2000,
        }
    }
}

impl UpstreamConfig {
    pub fn parse_servers(&self) -> Result<Vec<UpstreamAddr>, ConfigError> {
        self.servers
            .iter()
            .map(|server| {
                server
                    .parse::<UpstreamAddr>()
                    .map_err(|e| ConfigError::Validation(e.to_string()))
            })
            .collect()
    }
}
