use super::errors::ConfigError;
use crate::{Filter, HostOverride};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Container name filter
    pub name: Option<String>,

    /// Container labels, `key` or `key=value`
    pub labels: Vec<String>,

    /// Extra hostnames in `alias:container_name` form
    pub overrides: Vec<String>,
}

impl FilterConfig {
    pub fn to_filter(&self) -> Result<Filter, ConfigError> {
        let overrides = self
            .overrides
            .iter()
            .map(|entry| {
                entry
                    .parse::<HostOverride>()
                    .map_err(|e| ConfigError::Validation(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut filter = Filter::new()
            .with_labels(self.labels.iter().cloned())
            .with_overrides(overrides);
        if let Some(name) = &self.name {
            filter = filter.with_name(name.clone());
        }
        Ok(filter)
    }
}
