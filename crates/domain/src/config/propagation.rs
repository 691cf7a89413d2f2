use crate::{DomainError, NameserverTarget};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A public nameserver with the name shown in reports.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LabeledNameserver {
    pub label: String,
    pub address: String,
}

impl LabeledNameserver {
    pub fn new(label: &str, address: &str) -> Self {
        Self {
            label: label.to_string(),
            address: address.to_string(),
        }
    }

    pub fn to_target(&self) -> Result<NameserverTarget, DomainError> {
        let addr = NameserverTarget::parse_address(&self.address)?;
        Ok(NameserverTarget::new(self.label.as_str(), addr))
    }
}

/// Propagation check configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PropagationConfig {
    /// Per-nameserver timeout in milliseconds (default: 3000)
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Queried nameservers; report order follows this list
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<LabeledNameserver>,
}

impl PropagationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn targets(&self) -> Result<Vec<NameserverTarget>, DomainError> {
        self.nameservers.iter().map(|n| n.to_target()).collect()
    }
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout(),
            nameservers: default_nameservers(),
        }
    }
}

fn default_timeout() -> u64 {
    3000
}

fn default_nameservers() -> Vec<LabeledNameserver> {
    vec![
        LabeledNameserver::new("Google DNS", "8.8.8.8"),
        LabeledNameserver::new("Cloudflare", "1.1.1.1"),
        LabeledNameserver::new("Quad9", "9.9.9.9"),
        LabeledNameserver::new("OpenDNS", "208.67.222.222"),
        LabeledNameserver::new("AdGuard DNS", "94.140.14.14"),
    ]
}
