use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Health probe configuration for `check`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthCheckConfig {
    /// Per-server probe timeout in milliseconds (default: 2000)
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Name whose A record is requested to prove liveness (default: "google.com")
    #[serde(default = "default_probe_domain")]
    pub probe_domain: String,

    /// Servers probed when none are given (default: Google DNS pair)
    #[serde(default = "default_servers")]
    pub default_servers: Vec<String>,
}

impl HealthCheckConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout(),
            probe_domain: default_probe_domain(),
            default_servers: default_servers(),
        }
    }
}

fn default_timeout() -> u64 {
    2000
}

fn default_probe_domain() -> String {
    "google.com".to_string()
}

fn default_servers() -> Vec<String> {
    vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()]
}
