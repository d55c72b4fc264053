//! Name validation and record classification
//!
//! Pure predicates over domain/subdomain names, and the mapping from an IP
//! address to the address record type it implies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::Error;

/// Maximum length of a domain name
pub const MAX_DOMAIN_LENGTH: usize = 255;

/// Maximum total length of a subdomain
pub const MAX_SUBDOMAIN_LENGTH: usize = 253;

/// Maximum length of a single DNS label
pub const MAX_LABEL_LENGTH: usize = 63;

/// Returns true if the domain is non-blank and at most 255 characters long.
pub fn is_valid_domain(domain: &str) -> bool {
    !domain.trim().is_empty() && domain.len() <= MAX_DOMAIN_LENGTH
}

/// Returns true if the subdomain is empty (the root record) or consists of
/// valid dot-separated labels.
///
/// Each label must be 1-63 characters of ASCII letters, digits and hyphens,
/// and must not start or end with a hyphen. The whole name may be at most
/// 253 characters.
pub fn is_valid_subdomain(subdomain: &str) -> bool {
    if subdomain.is_empty() {
        return true;
    }

    if subdomain.len() > MAX_SUBDOMAIN_LENGTH {
        return false;
    }

    subdomain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return false;
    }

    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// DNS address record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// IPv4 address record
    #[serde(rename = "A")]
    A,
    /// IPv6 address record
    #[serde(rename = "AAAA")]
    Aaaa,
}

impl RecordType {
    /// Classify an IP address.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are treated as IPv4.
    pub fn for_ip(ip: IpAddr) -> Self {
        match ip.to_canonical() {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::Aaaa,
        }
    }

    /// The wire name of the record type
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            other => Err(Error::InvalidRecordType(other.to_string())),
        }
    }
}

/// Join a subdomain and a domain into a record name.
///
/// The root record (empty subdomain) is displayed as the bare domain.
pub fn qualified_name(subdomain: &str, domain: &str) -> String {
    if domain.is_empty() {
        return String::new();
    }

    if subdomain.is_empty() {
        return domain.to_string();
    }

    format!("{}.{}", subdomain, domain)
}

/// Check a domain/subdomain pair, reporting the first invalid name
pub fn validate_names(domain: &str, subdomain: &str) -> Result<(), Error> {
    if !is_valid_domain(domain) {
        return Err(Error::InvalidDomain(domain.to_string()));
    }

    if !is_valid_subdomain(subdomain) {
        return Err(Error::InvalidSubdomain(subdomain.to_string()));
    }

    Ok(())
}
