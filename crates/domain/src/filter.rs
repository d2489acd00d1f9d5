use crate::DomainError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Selects which workloads are visible to the resolver and declares extra
/// aliases on top of them.
///
/// Labels and name are combined with AND semantics when the inventory is
/// queried. A filter is built once at startup and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub name: Option<String>,
    pub labels: BTreeSet<String>,
    /// alias -> canonical workload name
    pub overrides: BTreeMap<String, String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn with_override(mut self, host_override: HostOverride) -> Self {
        self.overrides
            .insert(host_override.alias, host_override.canonical);
        self
    }

    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = HostOverride>,
    {
        for host_override in overrides {
            self = self.with_override(host_override);
        }
        self
    }

    /// Name criterion, `None` when the filter does not restrict by name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A single `alias:canonicalName` entry from the startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOverride {
    pub alias: String,
    pub canonical: String,
}

impl HostOverride {
    pub fn new(alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            canonical: canonical.into(),
        }
    }
}

impl FromStr for HostOverride {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (alias, canonical) = s.split_once(':').ok_or_else(|| {
            DomainError::InvalidOverride(format!(
                "'{}' (expected format alias:container_name)",
                s
            ))
        })?;

        let alias = alias.trim();
        let canonical = canonical.trim();
        if alias.is_empty() || canonical.is_empty() {
            return Err(DomainError::InvalidOverride(format!(
                "'{}' (alias and container name must not be empty)",
                s
            )));
        }

        Ok(Self::new(alias, canonical))
    }
}

impl fmt::Display for HostOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.alias, self.canonical)
    }
}
