#[path = "../common/mod.rs"]
mod common;

use common::{scheduler, Reply, TestServer};
use dns_status_application::services::{FanOutOptions, ReportFormatter};
use dns_status_application::use_cases::HealthCheckUseCase;
use dns_status_domain::{NameserverTarget, Outcome, OutcomeKind};
use std::net::Ipv4Addr;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_millis(300);

fn health(defaults: Vec<NameserverTarget>) -> HealthCheckUseCase {
    HealthCheckUseCase::new(scheduler(), "google.com", defaults, FanOutOptions::new(TIMEOUT))
}

// ============================================================================
// Health Flow Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_mixed_servers() {
    let up = TestServer::start(Reply::A(vec![Ipv4Addr::new(142, 250, 0, 1)]))
        .await
        .unwrap();
    let nxdomain = TestServer::start(Reply::NxDomain).await.unwrap();
    let down = TestServer::start(Reply::Silent).await.unwrap();

    let servers = vec![
        NameserverTarget::unlabeled(&up.addr().to_string()).unwrap(),
        NameserverTarget::unlabeled(&nxdomain.addr().to_string()).unwrap(),
        NameserverTarget::unlabeled(&down.addr().to_string()).unwrap(),
    ];

    let report = health(Vec::new()).execute(&servers).await;

    // Any DNS answer counts as alive, even NXDOMAIN
    assert_eq!(
        report.outcome_kinds(),
        vec![OutcomeKind::Success, OutcomeKind::Success, OutcomeKind::Timeout]
    );
    match &report.entries[0].outcome {
        Outcome::Success { latency_ms, .. } => {
            assert!(*latency_ms >= 0.0 && *latency_ms < TIMEOUT.as_millis() as f64)
        }
        other => panic!("expected success, got {:?}", other),
    }

    let text = ReportFormatter::health(&report);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(&format!("✅ DNS server {} is responding (response time: ", up.addr())));
    assert!(lines[0].ends_with("ms)"));
    assert!(lines[1].starts_with("✅"));
    assert_eq!(
        lines[2],
        format!("❌ DNS server {} failed: Timed out after 300ms", down.addr())
    );
}

#[tokio::test]
async fn test_health_check_uses_defaults_when_no_servers_given() {
    let first = TestServer::start(Reply::A(vec![Ipv4Addr::LOCALHOST])).await.unwrap();
    let second = TestServer::start(Reply::A(vec![Ipv4Addr::LOCALHOST])).await.unwrap();

    let defaults = vec![
        NameserverTarget::new("Default A", first.addr()),
        NameserverTarget::new("Default B", second.addr()),
    ];

    let report = health(defaults).execute(&[]).await;
    assert_eq!(report.labels(), vec!["Default A", "Default B"]);
    assert_eq!(report.success_count(), 2);
}

#[tokio::test]
async fn test_health_check_single_server() {
    let server = TestServer::start(Reply::A(vec![Ipv4Addr::LOCALHOST])).await.unwrap();
    let target = NameserverTarget::new("Solo", server.addr());

    let report = health(Vec::new()).execute(&[target]).await;
    assert_eq!(report.len(), 1);
    assert!(report.entries[0].outcome.is_success());
}
