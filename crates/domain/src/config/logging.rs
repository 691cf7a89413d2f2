use serde::{Deserialize, Serialize};

/// `[logging]` section.
///
/// `level` is a `tracing` filter directive ("info", "debug",
/// "dns_status_infrastructure=trace", ...). `--log-level` replaces it, and a
/// set `RUST_LOG` takes precedence over both.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
