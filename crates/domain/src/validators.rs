use crate::DomainError;
use std::net::IpAddr;
use std::str::FromStr;

const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// Checks that `domain` is a syntactically valid host name.
///
/// A single trailing root dot is accepted. Underscores are allowed so that
/// service names like `_dmarc.example.com` can be looked up.
pub fn validate_domain_name(domain: &str) -> Result<(), DomainError> {
    let name = domain.strip_suffix('.').unwrap_or(domain);

    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_DOMAIN_LENGTH {
        return Err(DomainError::InvalidDomainName(format!(
            "{domain}: exceeds {MAX_DOMAIN_LENGTH} characters"
        )));
    }

    for label in name.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
            return Err(DomainError::InvalidDomainName(format!(
                "{domain}: labels must be 1-{MAX_LABEL_LENGTH} characters"
            )));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(DomainError::InvalidDomainName(format!(
                "{domain}: labels cannot start or end with '-'"
            )));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidDomainName(format!(
                "{domain}: invalid character in label '{label}'"
            )));
        }
    }

    Ok(())
}

pub fn parse_ip_address(input: &str) -> Result<IpAddr, DomainError> {
    IpAddr::from_str(input.trim()).map_err(|_| DomainError::InvalidIpAddress(input.to_string()))
}

/// Builds the `in-addr.arpa` / `ip6.arpa` name queried for a PTR lookup.
pub fn reverse_lookup_name(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::with_capacity(32);
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.ip6.arpa", nibbles.join("."))
        }
    }
}
