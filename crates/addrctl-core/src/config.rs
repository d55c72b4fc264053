//! Configuration types for addrctl
//!
//! [`Settings`] describes where things live on disk and which API endpoint
//! to talk to. [`DesiredState`] and [`DeleteTarget`] are the per-invocation
//! inputs of the reconciler, built fresh from command-line flags every run.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::validate::{RecordType, validate_names};

/// Default time-to-live for newly created records, in seconds
pub const DEFAULT_TTL: i64 = 600;

/// Name of the settings directory inside the user's home directory
pub const SETTINGS_DIR_NAME: &str = ".addrctl";

/// Name of the credential file inside the settings directory
pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";

/// DNSimple API v1 base URL
pub const DEFAULT_API_BASE: &str = "https://api.dnsimple.com/v1";

/// Process-wide settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the credential file
    pub settings_dir: PathBuf,

    /// Path of the credential file
    pub credentials_path: PathBuf,

    /// Base URL of the DNS provider API
    pub api_base: String,
}

impl Settings {
    /// Build settings rooted at the given home directory
    pub fn with_home(home: impl AsRef<Path>) -> Self {
        let settings_dir = home.as_ref().join(SETTINGS_DIR_NAME);
        let credentials_path = settings_dir.join(CREDENTIALS_FILE_NAME);

        Self {
            settings_dir,
            credentials_path,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Build settings rooted at the current user's home directory
    pub fn locate() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::config("Unable to determine home directory"))?;
        Ok(Self::with_home(home))
    }
}

/// Requested state of an address record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredState {
    /// Zone the record lives in (e.g. "example.com")
    pub domain: String,

    /// Record label; empty for the root record
    pub subdomain: String,

    /// Target address
    pub ip: IpAddr,

    /// Time-to-live in seconds; only used when a record is created
    pub ttl: i64,
}

impl DesiredState {
    /// Create a desired state from an already parsed address
    pub fn new(
        domain: impl Into<String>,
        subdomain: impl Into<String>,
        ip: IpAddr,
        ttl: i64,
    ) -> Self {
        Self {
            domain: domain.into(),
            subdomain: subdomain.into(),
            ip: ip.to_canonical(),
            ttl,
        }
    }

    /// Create a desired state from a raw address string
    ///
    /// # Errors
    ///
    /// `MissingOrInvalidIp` if `raw_ip` is blank or does not parse.
    pub fn parse(
        domain: impl Into<String>,
        subdomain: impl Into<String>,
        raw_ip: &str,
        ttl: i64,
    ) -> Result<Self> {
        let ip = parse_ip(raw_ip)?;
        Ok(Self::new(domain, subdomain, ip, ttl))
    }

    /// Check names and TTL without touching the network
    ///
    /// Returns the TTL in wire form.
    ///
    /// # Errors
    ///
    /// `InvalidDomain`, `InvalidSubdomain` or `InvalidTtl`.
    pub fn validate(&self) -> Result<u32> {
        validate_names(&self.domain, &self.subdomain)?;
        u32::try_from(self.ttl).map_err(|_| Error::InvalidTtl(self.ttl))
    }
}

/// Parse an IP address given on the command line or on stdin
pub fn parse_ip(raw: &str) -> Result<IpAddr> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_ip("No IP address supplied"));
    }

    trimmed
        .parse::<IpAddr>()
        .map(|ip| ip.to_canonical())
        .map_err(|_| Error::invalid_ip(format!("Cannot parse IP {:?}", trimmed)))
}

/// Address record to delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    /// Zone the record lives in
    pub domain: String,

    /// Record label; empty for the root record
    pub subdomain: String,

    /// Record type as given by the user; validated by the reconciler
    pub record_type: String,
}

impl DeleteTarget {
    /// Create a new delete target
    pub fn new(
        domain: impl Into<String>,
        subdomain: impl Into<String>,
        record_type: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            subdomain: subdomain.into(),
            record_type: record_type.into(),
        }
    }

    /// Check names and parse the record type
    pub fn validate(&self) -> Result<RecordType> {
        validate_names(&self.domain, &self.subdomain)?;
        self.record_type.parse()
    }
}
