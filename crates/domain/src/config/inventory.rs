use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// `unix:///path/to/docker.sock` or `tcp://host:port`. Falls back to
    /// `DOCKER_HOST`, then to the local socket.
    pub docker_host: Option<String>,

    pub timeout_ms: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            docker_host: None,
            timeout_ms: 3000,
        }
    }
}
