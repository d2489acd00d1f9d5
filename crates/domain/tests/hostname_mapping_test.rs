use name_resolver_domain::{
    HostnameIpMapping, NameSource, NetworkAttachment, Workload,
};
use std::collections::BTreeMap;
use std::net::IpAddr;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

fn overrides(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
        .collect()
}

#[test]
fn test_insert_returns_previous_address() {
    let mut mapping = HostnameIpMapping::new();
    assert_eq!(mapping.insert("web-1", ip("172.17.0.2")), None);
    assert_eq!(
        mapping.insert("web-1", ip("172.17.0.3")),
        Some(ip("172.17.0.2"))
    );
    assert_eq!(mapping.get("web-1"), Some(ip("172.17.0.3")));
}

#[test]
fn test_keys_are_case_sensitive() {
    let mut mapping = HostnameIpMapping::new();
    mapping.insert("Web-1", ip("172.17.0.2"));

    assert!(mapping.contains("Web-1"));
    assert!(!mapping.contains("web-1"));
}

#[test]
fn test_apply_overrides_binds_alias_to_canonical_address() {
    let mut mapping = HostnameIpMapping::new();
    mapping.insert("postgres-1", ip("10.0.0.5"));

    let applied = mapping.apply_overrides(&overrides(&[("db", "postgres-1")]));

    assert_eq!(applied, 1);
    assert_eq!(mapping.get("db"), Some(ip("10.0.0.5")));
}

#[test]
fn test_apply_overrides_drops_unknown_canonical() {
    let mut mapping = HostnameIpMapping::new();
    mapping.insert("redis", ip("10.0.0.9"));

    let applied = mapping.apply_overrides(&overrides(&[("db", "postgres-1")]));

    assert_eq!(applied, 0);
    assert!(!mapping.contains("db"));
    assert_eq!(mapping.len(), 1);
}

#[test]
fn test_apply_overrides_do_not_chain() {
    let mut mapping = HostnameIpMapping::new();
    mapping.insert("postgres-1", ip("10.0.0.5"));

    mapping.apply_overrides(&overrides(&[("db", "postgres-1"), ("primary", "db")]));

    assert_eq!(mapping.get("db"), Some(ip("10.0.0.5")));
    assert!(!mapping.contains("primary"));
}

#[test]
fn test_apply_overrides_replace_discovered_name() {
    let mut mapping = HostnameIpMapping::new();
    mapping.insert("postgres-1", ip("10.0.0.5"));
    mapping.insert("db", ip("10.0.0.7"));

    mapping.apply_overrides(&overrides(&[("db", "postgres-1")]));

    assert_eq!(mapping.get("db"), Some(ip("10.0.0.5")));
}

#[test]
fn test_workload_name_facts_follow_precedence_order() {
    let workload = Workload::new("abc123")
        .with_name("/web-1")
        .with_attachment(
            NetworkAttachment::new("bridge", Some(ip("172.17.0.2")))
                .with_alias("web")
                .with_dns_name("web.internal"),
        );

    let facts = workload.name_facts();
    let sources: Vec<NameSource> = facts.iter().map(|f| f.source).collect();
    let names: Vec<&str> = facts.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(
        sources,
        vec![NameSource::Alias, NameSource::DnsName, NameSource::WorkloadName]
    );
    assert_eq!(names, vec!["web", "web.internal", "web-1"]);
    assert!(facts.iter().all(|f| f.address == ip("172.17.0.2")));
}

#[test]
fn test_workload_attachment_without_address_yields_no_facts() {
    let workload = Workload::new("abc123")
        .with_name("worker")
        .with_attachment(NetworkAttachment::new("none", None).with_alias("worker-alias"));

    assert!(workload.name_facts().is_empty());
}

#[test]
fn test_workload_emits_facts_per_attachment() {
    let workload = Workload::new("abc123")
        .with_name("api")
        .with_attachment(NetworkAttachment::new("front", Some(ip("10.1.0.2"))))
        .with_attachment(NetworkAttachment::new("back", Some(ip("10.2.0.2"))));

    let addresses: Vec<IpAddr> = workload.name_facts().iter().map(|f| f.address).collect();
    assert_eq!(addresses, vec![ip("10.1.0.2"), ip("10.2.0.2")]);
}
