use dns_status_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber is installed, since logging itself is configured
/// from the loaded file.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        timeout_ms = config.resolver.timeout_ms,
        health_timeout_ms = config.health.timeout_ms,
        propagation_timeout_ms = config.propagation.timeout_ms,
        propagation_nameservers = config.propagation.nameservers.len(),
        resolv_conf = %config.resolver.resolv_conf,
        "Configuration loaded"
    );
}
