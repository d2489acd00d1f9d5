use crate::NameFact;
use std::collections::{BTreeMap, HashMap};
use std::net::IpAddr;

/// Hostname to address table built for a single resolution pass.
///
/// Keys carry no trailing dot and are compared case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostnameIpMapping {
    entries: HashMap<String, IpAddr>,
}

impl HostnameIpMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites. Returns the address previously bound to the
    /// name, if any.
    pub fn insert(&mut self, hostname: impl Into<String>, address: IpAddr) -> Option<IpAddr> {
        self.entries.insert(hostname.into(), address)
    }

    pub fn insert_fact(&mut self, fact: &NameFact) -> Option<IpAddr> {
        self.insert(fact.name.clone(), fact.address)
    }

    pub fn get(&self, hostname: &str) -> Option<IpAddr> {
        self.entries.get(hostname).copied()
    }

    pub fn contains(&self, hostname: &str) -> bool {
        self.entries.contains_key(hostname)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, IpAddr)> {
        self.entries.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    /// Binds every alias whose canonical name is already present to that
    /// name's address. Canonical names are looked up in the mapping as it
    /// was before any override was applied, so overrides never chain.
    ///
    /// Returns the number of aliases added.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, String>) -> usize {
        let resolved: Vec<(String, IpAddr)> = overrides
            .iter()
            .filter_map(|(alias, canonical)| {
                self.get(canonical).map(|addr| (alias.clone(), addr))
            })
            .collect();

        let applied = resolved.len();
        for (alias, addr) in resolved {
            self.insert(alias, addr);
        }
        applied
    }
}

impl FromIterator<(String, IpAddr)> for HostnameIpMapping {
    fn from_iter<T: IntoIterator<Item = (String, IpAddr)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
