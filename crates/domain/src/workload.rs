use std::net::IpAddr;

/// Origin of a discovered name. Variants are declared in insertion order:
/// later sources overwrite earlier ones when they collide inside one
/// attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NameSource {
    Alias,
    DnsName,
    WorkloadName,
}

impl NameSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameSource::Alias => "alias",
            NameSource::DnsName => "dns_name",
            NameSource::WorkloadName => "workload_name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFact {
    pub name: String,
    pub address: IpAddr,
    pub source: NameSource,
}

/// A workload's membership in one network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkAttachment {
    pub network: String,
    pub address: Option<IpAddr>,
    pub aliases: Vec<String>,
    pub dns_names: Vec<String>,
}

impl NetworkAttachment {
    pub fn new(network: impl Into<String>, address: Option<IpAddr>) -> Self {
        Self {
            network: network.into(),
            address,
            aliases: Vec::new(),
            dns_names: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_dns_name(mut self, dns_name: impl Into<String>) -> Self {
        self.dns_names.push(dns_name.into());
        self
    }
}

/// A running workload as reported by the inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    pub id: String,
    /// Canonical names, without the runtime's leading `/`.
    pub names: Vec<String>,
    pub attachments: Vec<NetworkAttachment>,
}

impl Workload {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: Vec::new(),
            attachments: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.strip_prefix('/').map(str::to_string).unwrap_or(name);
        self.names.push(name);
        self
    }

    pub fn with_attachment(mut self, attachment: NetworkAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Name facts in insertion order: per attachment, aliases, then DNS
    /// names, then canonical names. Attachments without an address yield
    /// nothing.
    pub fn name_facts(&self) -> Vec<NameFact> {
        let mut facts = Vec::new();

        for attachment in &self.attachments {
            let Some(address) = attachment.address else {
                continue;
            };

            let sources = [
                (NameSource::Alias, attachment.aliases.as_slice()),
                (NameSource::DnsName, attachment.dns_names.as_slice()),
                (NameSource::WorkloadName, self.names.as_slice()),
            ];

            for (source, names) in sources {
                facts.extend(names.iter().map(|name| NameFact {
                    name: name.clone(),
                    address,
                    source,
                }));
            }
        }

        facts
    }
}
