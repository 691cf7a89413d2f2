#[path = "../common/mod.rs"]
mod common;

use common::{scheduler, Reply, TestDomains, TestServer};
use dns_status_application::services::{FanOutOptions, ReportFormatter};
use dns_status_application::use_cases::PropagationCheckUseCase;
use dns_status_domain::{NameserverTarget, OutcomeKind, RecordType};
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

const TIMEOUT: Duration = Duration::from_millis(300);

fn ip(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(192, 0, 2, last)
}

// ============================================================================
// Propagation Flow Tests
// ============================================================================

#[tokio::test]
async fn test_propagation_reports_every_resolver_in_order() {
    let alpha = TestServer::start(Reply::A(vec![ip(1)])).await.unwrap();
    let bravo = TestServer::start(Reply::Slow(Duration::from_millis(80), vec![ip(1)]))
        .await
        .unwrap();
    let charlie = TestServer::start(Reply::A(vec![ip(99)])).await.unwrap();
    let delta = TestServer::start(Reply::Silent).await.unwrap();

    let targets = vec![
        NameserverTarget::new("Alpha", alpha.addr()),
        NameserverTarget::new("Bravo", bravo.addr()),
        NameserverTarget::new("Charlie", charlie.addr()),
        NameserverTarget::new("Delta", delta.addr()),
    ];
    let use_case = PropagationCheckUseCase::new(scheduler(), targets, FanOutOptions::new(TIMEOUT));

    let start = Instant::now();
    let report = use_case.execute(TestDomains::example(), RecordType::A).await;
    let elapsed = start.elapsed();

    assert_eq!(report.labels(), vec!["Alpha", "Bravo", "Charlie", "Delta"]);
    assert_eq!(
        report.outcome_kinds(),
        vec![
            OutcomeKind::Success,
            OutcomeKind::Success,
            OutcomeKind::Success,
            OutcomeKind::Timeout
        ]
    );
    assert_eq!(report.distinct_answer_sets(), 2);

    // Bounded by the slowest target, not the sum
    assert!(elapsed < TIMEOUT * 3, "took {:?}", elapsed);

    let text = ReportFormatter::propagation(&report);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "DNS propagation check for example.com (A records):");
    assert_eq!(lines[1], "✅ Alpha: 192.0.2.1");
    assert_eq!(lines[2], "✅ Bravo: 192.0.2.1");
    assert_eq!(lines[3], "✅ Charlie: 192.0.2.99");
    assert_eq!(lines[4], "❌ Delta: Error - Timed out after 300ms");
    assert_eq!(lines[5], "3/4 nameservers answered; 2 distinct answer set(s)");
}

#[tokio::test]
async fn test_propagation_nxdomain_everywhere() {
    let first = TestServer::start(Reply::NxDomain).await.unwrap();
    let second = TestServer::start(Reply::NxDomain).await.unwrap();

    let targets = vec![
        NameserverTarget::new("First", first.addr()),
        NameserverTarget::new("Second", second.addr()),
    ];
    let use_case = PropagationCheckUseCase::new(scheduler(), targets, FanOutOptions::new(TIMEOUT));

    let report = use_case
        .execute(TestDomains::nonexistent(), RecordType::A)
        .await;

    assert_eq!(
        report.outcome_kinds(),
        vec![OutcomeKind::NameNotFound, OutcomeKind::NameNotFound]
    );
    assert_eq!(report.success_count(), 0);

    let text = ReportFormatter::propagation(&report);
    assert!(text.contains("❌ First: Error - Domain does not exist"));
    assert!(text.ends_with("0/2 nameservers answered; 0 distinct answer set(s)"));
}

#[tokio::test]
async fn test_propagation_rejects_invalid_domain_once() {
    let server = TestServer::start(Reply::A(vec![ip(1)])).await.unwrap();
    let targets = vec![
        NameserverTarget::new("One", server.addr()),
        NameserverTarget::new("Two", server.addr()),
    ];
    let use_case = PropagationCheckUseCase::new(scheduler(), targets, FanOutOptions::new(TIMEOUT));

    let report = use_case.execute("bad domain!", RecordType::A).await;

    assert_eq!(
        report.outcome_kinds(),
        vec![OutcomeKind::InvalidInput, OutcomeKind::InvalidInput]
    );
    let text = ReportFormatter::propagation(&report);
    assert!(text.starts_with("Invalid domain name: bad domain!"), "{}", text);
    assert_eq!(text.lines().count(), 1);
}
