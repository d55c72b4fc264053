// # Memory Credential Store
//
// In-memory implementation of CredentialStore.
//
// Nothing survives the process. Useful for tests and for embedding the
// library where credentials come from somewhere other than the home
// directory.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::traits::credential_store::{ApiCredentials, CredentialStore};

/// In-memory credential store
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<RwLock<Option<ApiCredentials>>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds credentials
    pub fn with_credentials(credentials: ApiCredentials) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(credentials))),
        }
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_none()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get_credentials(&self) -> Result<ApiCredentials> {
        let guard = self.inner.read().await;
        guard
            .clone()
            .ok_or_else(|| Error::no_credentials("There are no credentials stored in memory"))
    }

    async fn save_credentials(&self, credentials: &ApiCredentials) -> Result<()> {
        let mut guard = self.inner.write().await;
        *guard = Some(credentials.clone());
        Ok(())
    }

    async fn delete_credentials(&self) -> Result<()> {
        let mut guard = self.inner.write().await;
        match guard.take() {
            Some(_) => Ok(()),
            None => Err(Error::no_credentials(
                "There are no credentials stored in memory",
            )),
        }
    }
}
