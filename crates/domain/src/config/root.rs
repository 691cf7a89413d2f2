use super::{ConfigError, HealthCheckConfig, LoggingConfig, PropagationConfig, ResolverConfig};
use crate::validators::validate_domain_name;
use crate::NameserverTarget;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub health: HealthCheckConfig,

    #[serde(default)]
    pub propagation: PropagationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the configuration from `path` (defaults when `None`) and applies
    /// CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
                        path: path.to_string(),
                        message: e.to_string(),
                    })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout_ms;
            self.health.timeout_ms = timeout_ms;
            self.propagation.timeout_ms = timeout_ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.timeout_ms == 0
            || self.health.timeout_ms == 0
            || self.propagation.timeout_ms == 0
        {
            return Err(ConfigError::Validation(
                "timeouts must be greater than zero".to_string(),
            ));
        }

        if let Some(ceiling) = self.resolver.ceiling_ms {
            if ceiling < self.resolver.timeout_ms {
                return Err(ConfigError::Validation(format!(
                    "resolver.ceiling_ms ({ceiling}) must not be below resolver.timeout_ms ({})",
                    self.resolver.timeout_ms
                )));
            }
        }

        validate_domain_name(&self.health.probe_domain)
            .map_err(|e| ConfigError::Validation(format!("health.probe_domain: {e}")))?;

        for server in self
            .health
            .default_servers
            .iter()
            .chain(&self.resolver.fallback_nameservers)
        {
            NameserverTarget::parse_address(server)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }

        let mut labels = HashSet::new();
        for nameserver in &self.propagation.nameservers {
            if nameserver.label.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "propagation nameserver label cannot be empty".to_string(),
                ));
            }
            if !labels.insert(nameserver.label.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate propagation nameserver label: {}",
                    nameserver.label
                )));
            }
            nameserver
                .to_target()
                .map_err(|e| ConfigError::Validation(format!("{}: {e}", nameserver.label)))?;
        }

        Ok(())
    }
}
