#![allow(dead_code)]

pub use mock_transport::{Behavior, MockNameserverSource, MockResolverTransport};

use dns_status_domain::NameserverTarget;

pub fn target(label: &str, addr: &str) -> NameserverTarget {
    NameserverTarget::new(label, addr.parse().expect("valid socket address"))
}
