use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// TTL of records answered from the workload mapping.
    pub local_ttl: u32,
}
