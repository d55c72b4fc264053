//! Error types for addrctl
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for addrctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for addrctl
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed command-line input
    #[error("{0}")]
    InvalidInput(String),

    /// The IP address was not supplied or could not be parsed
    #[error("{0}")]
    MissingOrInvalidIp(String),

    /// Negative or out-of-range time-to-live
    #[error("The given TTL is invalid: {0} (must be between 0 and {max})", max = u32::MAX)]
    InvalidTtl(i64),

    /// Malformed domain name
    #[error("The domain name is invalid: {0:?}")]
    InvalidDomain(String),

    /// Malformed subdomain name
    #[error("The subdomain name is invalid: {0:?}")]
    InvalidSubdomain(String),

    /// Record type other than A or AAAA
    #[error("The given record type is invalid: {0:?} (expected \"A\" or \"AAAA\")")]
    InvalidRecordType(String),

    /// Create found an existing record it must not clobber
    #[error("An address record of type {record_type:?} already exists for {name:?}")]
    RecordAlreadyExists {
        /// Record type ("A" or "AAAA")
        record_type: String,
        /// Fully qualified record name
        name: String,
    },

    /// Update or delete found no matching record
    #[error("No address record of type {record_type:?} found for {name:?}")]
    RecordNotFound {
        /// Record type ("A" or "AAAA")
        record_type: String,
        /// Fully qualified record name
        name: String,
    },

    /// The record already points at the requested address
    #[error("No update required. IP address did not change ({0}).")]
    NoUpdateRequired(String),

    /// There are no stored credentials
    #[error("{0}")]
    NoCredentials(String),

    /// Credential store failures other than absence
    #[error("{0}")]
    Credentials(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Authentication errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limiting errors
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Remote resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider-specific error
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a missing/invalid IP error
    pub fn invalid_ip(msg: impl Into<String>) -> Self {
        Self::MissingOrInvalidIp(msg.into())
    }

    /// Create a "no credentials" error
    pub fn no_credentials(msg: impl Into<String>) -> Self {
        Self::NoCredentials(msg.into())
    }

    /// Create a credential store error
    pub fn credentials(msg: impl Into<String>) -> Self {
        Self::Credentials(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a rate limit error
    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::RateLimited(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a "record already exists" error
    pub fn already_exists(record_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::RecordAlreadyExists {
            record_type: record_type.into(),
            name: name.into(),
        }
    }

    /// Create a "record not found" error
    pub fn record_not_found(record_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::RecordNotFound {
            record_type: record_type.into(),
            name: name.into(),
        }
    }

    /// Whether this error means there were no credentials to act on
    pub fn is_no_credentials(&self) -> bool {
        matches!(self, Self::NoCredentials(_))
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
