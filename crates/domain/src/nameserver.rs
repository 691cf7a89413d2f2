use super::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const DNS_PORT: u16 = 53;

/// A labeled nameserver queried directly instead of through the system resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameserverTarget {
    pub label: Arc<str>,
    pub address: SocketAddr,
}

impl NameserverTarget {
    pub fn new(label: impl Into<Arc<str>>, address: SocketAddr) -> Self {
        Self {
            label: label.into(),
            address,
        }
    }

    pub fn from_ip(label: impl Into<Arc<str>>, ip: IpAddr) -> Self {
        Self::new(label, SocketAddr::new(ip, DNS_PORT))
    }

    /// Parses `address` and labels the target with it, the way ad-hoc
    /// health-check targets are displayed.
    pub fn unlabeled(address: &str) -> Result<Self, DomainError> {
        let addr = Self::parse_address(address)?;
        Ok(Self::new(address.trim(), addr))
    }

    /// Accepts `8.8.8.8`, `2001:4860:4860::8888`, `127.0.0.1:5353` or `[::1]:5353`.
    pub fn parse_address(input: &str) -> Result<SocketAddr, DomainError> {
        let input = input.trim();
        if let Ok(ip) = IpAddr::from_str(input) {
            return Ok(SocketAddr::new(ip, DNS_PORT));
        }
        SocketAddr::from_str(input).map_err(|_| DomainError::InvalidIpAddress(input.to_string()))
    }
}

impl fmt::Display for NameserverTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.address)
    }
}
