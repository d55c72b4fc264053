// # Credential Store Trait
//
// Defines the interface for persisting the DNS provider API credentials.
//
// ## Purpose
//
// `login` saves credentials, `logout` erases them, and every action that
// talks to the provider reads them once through a `DnsClientFactory`.
//
// ## Implementations
//
// - File-based: JSON file under the user's home directory
// - In-memory: for tests and embedding
//
// ## Usage
//
// ```rust,ignore
// use addrctl_core::{ApiCredentials, CredentialStore};
//
// async fn login(store: &dyn CredentialStore) -> addrctl_core::Result<()> {
//     let credentials = ApiCredentials::new("alice@example.com", "s3cr3t")?;
//     store.save_credentials(&credentials).await
// }
// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// DNS provider API credentials
///
/// Serialized as `{"Email":"...","Token":"..."}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredentials {
    /// Account e-mail address
    #[serde(rename = "Email")]
    pub email: String,
    /// API token
    /// ⚠️ NEVER log this value
    #[serde(rename = "Token")]
    pub token: String,
}

impl ApiCredentials {
    /// Create a credential pair
    ///
    /// # Errors
    ///
    /// `InvalidInput` if either value is blank after trimming.
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let credentials = Self {
            email: email.into(),
            token: token.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Check that both fields are non-blank
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(Error::invalid_input("No e-mail address supplied"));
        }

        if self.token.trim().is_empty() {
            return Err(Error::invalid_input("No API token supplied"));
        }

        Ok(())
    }
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("email", &self.email)
            .field("token", &"<REDACTED>")
            .finish()
    }
}

/// Trait for credential store implementations
///
/// # Error Contract
///
/// `get_credentials` and `delete_credentials` must return
/// [`Error::NoCredentials`] when nothing is stored, and a different variant
/// for every other failure. `logout` reports the two cases differently.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the stored credentials
    ///
    /// # Returns
    ///
    /// - `Ok(ApiCredentials)`: The stored credentials
    /// - `Err(Error::NoCredentials)`: Nothing stored
    /// - `Err(Error)`: Storage error or unreadable content
    async fn get_credentials(&self) -> Result<ApiCredentials>;

    /// Store credentials, replacing any previous ones
    async fn save_credentials(&self, credentials: &ApiCredentials) -> Result<()>;

    /// Erase the stored credentials
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Credentials were erased
    /// - `Err(Error::NoCredentials)`: There was nothing to erase
    /// - `Err(Error)`: Storage error
    async fn delete_credentials(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let credentials = ApiCredentials::new("alice@example.com", "t0k3n").unwrap();
        let json = serde_json::to_string(&credentials).unwrap();
        assert_eq!(json, r#"{"Email":"alice@example.com","Token":"t0k3n"}"#);

        let parsed: ApiCredentials = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, credentials);
    }

    #[test]
    fn test_blank_values_rejected() {
        assert!(ApiCredentials::new("", "token").is_err());
        assert!(ApiCredentials::new("  ", "token").is_err());
        assert!(ApiCredentials::new("alice@example.com", "").is_err());
        assert!(ApiCredentials::new("alice@example.com", "\t\n").is_err());
    }

    #[test]
    fn test_token_not_exposed_in_debug() {
        let credentials = ApiCredentials::new("alice@example.com", "secret_token_12345").unwrap();
        let debug_str = format!("{:?}", credentials);
        assert!(!debug_str.contains("secret_token"));
        assert!(debug_str.contains("alice@example.com"));
    }
}
