use dns_status_application::ports::{NameserverSource, ResolverTransport};
use dns_status_application::services::{FanOutOptions, FanOutScheduler, ResolverClient};
use dns_status_application::use_cases::{
    FlushCacheUseCase, ForwardLookupUseCase, HealthCheckUseCase, PropagationCheckUseCase,
    ReverseLookupUseCase,
};
use dns_status_domain::{Config, NameserverTarget};
use dns_status_infrastructure::dns::WireResolverTransport;
use dns_status_infrastructure::system::ResolvConfNameserverSource;
use std::sync::Arc;
use tracing::info;

/// Every operation the command line exposes, wired to one shared scheduler.
pub struct UseCases {
    pub lookup: ForwardLookupUseCase,
    pub reverse: ReverseLookupUseCase,
    pub health: HealthCheckUseCase,
    pub propagation: PropagationCheckUseCase,
    pub flush: FlushCacheUseCase,
}

impl UseCases {
    pub async fn build(config: &Config) -> anyhow::Result<Self> {
        let transport: Arc<dyn ResolverTransport> = Arc::new(WireResolverTransport::new());
        let nameservers: Arc<dyn NameserverSource> = Arc::new(
            ResolvConfNameserverSource::load(
                &config.resolver.resolv_conf,
                &config.resolver.fallback_nameservers,
            )
            .await,
        );

        Self::with_ports(config, transport, nameservers)
    }

    pub fn with_ports(
        config: &Config,
        transport: Arc<dyn ResolverTransport>,
        nameservers: Arc<dyn NameserverSource>,
    ) -> anyhow::Result<Self> {
        let client = Arc::new(ResolverClient::new(transport));
        let scheduler = Arc::new(FanOutScheduler::new(client));

        let lookup_options =
            FanOutOptions::new(config.resolver.timeout()).with_ceiling(config.resolver.ceiling());

        let health_servers = config
            .health
            .default_servers
            .iter()
            .map(|server| NameserverTarget::unlabeled(server))
            .collect::<Result<Vec<_>, _>>()?;

        let propagation_targets = config.propagation.targets()?;

        info!(
            system_nameservers = nameservers.nameservers().len(),
            health_defaults = health_servers.len(),
            propagation_targets = propagation_targets.len(),
            "Use cases initialized"
        );

        Ok(Self {
            lookup: ForwardLookupUseCase::new(
                Arc::clone(&scheduler),
                Arc::clone(&nameservers),
                lookup_options,
            ),
            reverse: ReverseLookupUseCase::new(
                Arc::clone(&scheduler),
                Arc::clone(&nameservers),
                lookup_options,
            ),
            health: HealthCheckUseCase::new(
                Arc::clone(&scheduler),
                config.health.probe_domain.as_str(),
                health_servers,
                FanOutOptions::new(config.health.timeout()),
            ),
            propagation: PropagationCheckUseCase::new(
                scheduler,
                propagation_targets,
                FanOutOptions::new(config.propagation.timeout()),
            ),
            flush: FlushCacheUseCase::new(nameservers),
        })
    }
}
