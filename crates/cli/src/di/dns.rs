use name_resolver_application::ports::{UpstreamExchange, WorkloadInventory};
use name_resolver_application::use_cases::{
    BuildHostnameMappingUseCase, ResolveFallbackChainUseCase, ResolveQuestionsUseCase,
};
use name_resolver_domain::Config;
use name_resolver_infrastructure::dns::{DnsServerHandler, UdpUpstreamExchange};
use name_resolver_infrastructure::inventory::{DockerEndpoint, DockerInventory};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub resolve_questions: Arc<ResolveQuestionsUseCase>,
    pub request_timeout: Duration,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let inventory = Self::build_inventory(config)?;
        let exchange: Arc<dyn UpstreamExchange> = Arc::new(UdpUpstreamExchange::new());

        let filter = Arc::new(config.filter.to_filter()?);
        let upstreams = config.upstream.parse_servers()?;
        info!(
            upstreams = upstreams.len(),
            timeout_ms = config.upstream.timeout_ms,
            "Fallback chain configured"
        );

        let mapping = Arc::new(BuildHostnameMappingUseCase::new(inventory));
        let fallback = Arc::new(ResolveFallbackChainUseCase::new(
            exchange,
            upstreams,
            Duration::from_millis(config.upstream.timeout_ms),
        ));
        let resolve_questions = Arc::new(
            ResolveQuestionsUseCase::new(mapping, fallback, filter)
                .with_local_ttl(config.resolver.local_ttl),
        );

        Ok(Self {
            resolve_questions,
            request_timeout: Duration::from_millis(config.server.request_timeout_ms),
        })
    }

    pub fn handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(self.resolve_questions.clone(), self.request_timeout)
    }

    fn build_inventory(config: &Config) -> anyhow::Result<Arc<dyn WorkloadInventory>> {
        let endpoint = DockerEndpoint::resolve(config.inventory.docker_host.as_deref())?;
        info!(endpoint = ?endpoint, "Using Docker inventory");

        Ok(Arc::new(DockerInventory::new(
            endpoint,
            Duration::from_millis(config.inventory.timeout_ms),
        )))
    }
}
