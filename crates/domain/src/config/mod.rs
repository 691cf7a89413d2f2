//! Configuration module for DNS Status
//!
//! Every value has a compiled-in default; a TOML file and CLI overrides are
//! optional layers on top.
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Lookup/reverse timeouts and system nameserver source
//! - `health`: Health probe settings
//! - `propagation`: Labeled public nameservers for propagation checks
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod health;
pub mod logging;
pub mod propagation;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use health::HealthCheckConfig;
pub use logging::LoggingConfig;
pub use propagation::{LabeledNameserver, PropagationConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
