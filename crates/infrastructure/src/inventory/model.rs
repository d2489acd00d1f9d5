//! Subset of the Docker Engine API payloads used to build workloads.

use name_resolver_domain::{NetworkAttachment, Workload};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::IpAddr;
use tracing::warn;

/// Entry of `GET /containers/json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    pub id: String,
    #[serde(default)]
    pub names: Option<Vec<String>>,
}

/// Body of `GET /containers/{id}/json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerInspect {
    pub id: String,
    #[serde(default)]
    pub network_settings: Option<NetworkSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkSettings {
    #[serde(default)]
    pub networks: Option<BTreeMap<String, Option<EndpointSettings>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointSettings {
    #[serde(rename = "Aliases", default)]
    pub aliases: Option<Vec<String>>,
    #[serde(rename = "DNSNames", default)]
    pub dns_names: Option<Vec<String>>,
    #[serde(rename = "IPAddress", default)]
    pub ip_address: Option<String>,
    #[serde(rename = "GlobalIPv6Address", default)]
    pub global_ipv6_address: Option<String>,
}

impl EndpointSettings {
    /// IPv4 address if assigned, otherwise the global IPv6 address.
    pub fn address(&self, container_id: &str, network: &str) -> Option<IpAddr> {
        [&self.ip_address, &self.global_ipv6_address]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .find_map(|s| match s.parse::<IpAddr>() {
                Ok(ip) => Some(ip),
                Err(_) => {
                    warn!(
                        container = %container_id,
                        network = %network,
                        address = %s,
                        "Ignoring unparseable container address"
                    );
                    None
                }
            })
    }
}

/// Combines the list entry (which carries the container names) with the
/// inspect payload (which carries the network attachments).
pub fn to_workload(summary: &ContainerSummary, inspect: ContainerInspect) -> Workload {
    let mut workload = Workload::new(summary.id.clone());

    for name in summary.names.iter().flatten() {
        workload = workload.with_name(name.as_str());
    }

    let networks = inspect
        .network_settings
        .and_then(|settings| settings.networks)
        .unwrap_or_default();

    for (network, endpoint) in networks {
        let Some(endpoint) = endpoint else {
            continue;
        };

        let mut attachment =
            NetworkAttachment::new(network.as_str(), endpoint.address(&inspect.id, &network));
        for alias in endpoint.aliases.into_iter().flatten() {
            attachment = attachment.with_alias(alias);
        }
        for dns_name in endpoint.dns_names.into_iter().flatten() {
            attachment = attachment.with_dns_name(dns_name);
        }
        workload = workload.with_attachment(attachment);
    }

    workload
}
