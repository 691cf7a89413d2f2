use arc_swap::ArcSwap;
use async_trait::async_trait;
use dns_status_application::ports::NameserverSource;
use dns_status_domain::{DomainError, NameserverTarget};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

/// System nameserver list read from a resolv.conf-style file.
///
/// The current list is an `ArcSwap` snapshot, so readers never block and
/// `reload` replaces it atomically.
pub struct ResolvConfNameserverSource {
    path: PathBuf,
    fallback: Arc<Vec<NameserverTarget>>,
    current: ArcSwap<Vec<NameserverTarget>>,
}

impl ResolvConfNameserverSource {
    /// Builds the source and performs the initial read.
    pub async fn load(path: impl Into<PathBuf>, fallback: &[String]) -> Self {
        let fallback = Arc::new(Self::fallback_targets(fallback));
        let source = Self {
            path: path.into(),
            current: ArcSwap::new(Arc::clone(&fallback)),
            fallback,
        };
        source.refresh().await;
        source
    }

    /// Extracts `nameserver` entries in file order. Comments (`#`, `;`) and
    /// other directives are ignored; unparsable addresses are skipped.
    pub fn parse(content: &str) -> Vec<NameserverTarget> {
        let mut targets = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let mut fields = line.split_whitespace();
            if fields.next() != Some("nameserver") {
                continue;
            }

            let Some(address) = fields.next() else {
                warn!(line = line, "nameserver directive without an address");
                continue;
            };

            // Link-local scopes like fe80::1%eth0 cannot be queried by address alone.
            match NameserverTarget::parse_address(address) {
                Ok(addr) if !address.contains('%') => {
                    let label = format!("System #{}", targets.len() + 1);
                    targets.push(NameserverTarget::new(label, addr));
                }
                _ => {
                    warn!(address = address, "Invalid nameserver address in resolver configuration");
                }
            }
        }

        targets
    }

    fn fallback_targets(addresses: &[String]) -> Vec<NameserverTarget> {
        addresses
            .iter()
            .filter_map(|address| match NameserverTarget::parse_address(address) {
                Ok(addr) => Some(addr),
                Err(e) => {
                    warn!(error = %e, "Skipping fallback nameserver");
                    None
                }
            })
            .enumerate()
            .map(|(i, addr)| NameserverTarget::new(format!("Fallback #{}", i + 1), addr))
            .collect()
    }

    async fn refresh(&self) -> usize {
        let parsed = match fs::read_to_string(&self.path).await {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read resolver configuration"
                );
                Vec::new()
            }
        };

        let snapshot = if parsed.is_empty() {
            debug!(
                fallback = self.fallback.len(),
                "No system nameservers found, using fallback list"
            );
            Arc::clone(&self.fallback)
        } else {
            Arc::new(parsed)
        };

        let count = snapshot.len();
        self.current.store(snapshot);
        info!(path = %self.path.display(), nameservers = count, "System nameservers loaded");
        count
    }
}

#[async_trait]
impl NameserverSource for ResolvConfNameserverSource {
    fn nameservers(&self) -> Arc<Vec<NameserverTarget>> {
        self.current.load_full()
    }

    async fn reload(&self) -> Result<usize, DomainError> {
        Ok(self.refresh().await)
    }
}
