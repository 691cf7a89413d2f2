use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for `lookup` and `reverse`, which query the system nameservers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Per-attempt timeout in milliseconds (default: 3000)
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Upper bound on the whole fan-out in milliseconds.
    /// Defaults to the per-attempt timeout when unset.
    #[serde(default)]
    pub ceiling_ms: Option<u64>,

    /// Path of the system resolver configuration (default: "/etc/resolv.conf")
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    /// Nameservers used when the system list is empty
    #[serde(default = "default_fallback_nameservers")]
    pub fallback_nameservers: Vec<String>,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn ceiling(&self) -> Option<Duration> {
        self.ceiling_ms.map(Duration::from_millis)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout(),
            ceiling_ms: None,
            resolv_conf: default_resolv_conf(),
            fallback_nameservers: default_fallback_nameservers(),
        }
    }
}

fn default_timeout() -> u64 {
    3000
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_fallback_nameservers() -> Vec<String> {
    vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()]
}
