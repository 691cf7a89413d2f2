//! # DNS Status
//!
//! Concurrent DNS diagnostics: every question is sent to several nameservers
//! at once and the answers are reported side by side.

mod bootstrap;
mod di;

use clap::{Parser, Subcommand};
use dns_status_application::services::ReportFormatter;
use dns_status_domain::{CliOverrides, DomainError, NameserverTarget, RecordType};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "dns-status")]
#[command(version)]
#[command(about = "Query several DNS nameservers concurrently and compare their answers")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Per-nameserver timeout in milliseconds (overrides the config file)
    #[arg(short, long, global = true)]
    timeout_ms: Option<u64>,

    /// Log level or filter directive, e.g. "debug" (logs go to stderr)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a domain against the system nameservers
    Lookup {
        domain: String,
        /// Record type (A, AAAA, MX, TXT, NS, CNAME, ...)
        #[arg(default_value = "A")]
        record_type: String,
    },
    /// Find the hostname of an IP address
    Reverse { ip: String },
    /// Check that nameservers respond, and how fast
    Check {
        /// Nameserver addresses; the configured defaults when omitted
        servers: Vec<String>,
    },
    /// Compare answers across well-known public resolvers
    Propagation {
        domain: String,
        #[arg(default_value = "A")]
        record_type: String,
    },
    /// Reset resolver state
    Flush,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::config::log_config_summary(cli.config.as_deref(), &config);

    let use_cases = di::UseCases::build(&config).await?;
    let output = run(cli.command, &use_cases).await?;
    println!("{}", output);

    Ok(())
}

async fn run(command: Command, use_cases: &di::UseCases) -> anyhow::Result<String> {
    let output = match command {
        Command::Lookup {
            domain,
            record_type,
        } => {
            let record_type = RecordType::from_str(&record_type)?;
            let report = use_cases.lookup.execute(&domain, record_type).await;
            ReportFormatter::lookup(&report)
        }
        Command::Reverse { ip } => {
            let report = use_cases.reverse.execute(&ip).await;
            ReportFormatter::reverse(&report)
        }
        Command::Check { servers } => match parse_servers(&servers) {
            Ok(targets) => {
                let report = use_cases.health.execute(&targets).await;
                ReportFormatter::health(&report)
            }
            Err(e) => e.to_string(),
        },
        Command::Propagation {
            domain,
            record_type,
        } => {
            let record_type = RecordType::from_str(&record_type)?;
            let report = use_cases.propagation.execute(&domain, record_type).await;
            ReportFormatter::propagation(&report)
        }
        Command::Flush => {
            use_cases.flush.execute().await?;
            "DNS resolver cache has been flushed.".to_string()
        }
    };

    Ok(output)
}

fn parse_servers(servers: &[String]) -> Result<Vec<NameserverTarget>, DomainError> {
    servers
        .iter()
        .map(|server| NameserverTarget::unlabeled(server))
        .collect()
}
