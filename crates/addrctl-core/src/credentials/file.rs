// # File Credential Store
//
// File-based implementation of CredentialStore.
//
// ## File Format
//
// ```json
// {"Email":"alice@example.com","Token":"..."}
// ```
//
// ## Permissions
//
// On Unix the settings directory is created with mode 0700 and the
// credential file is written with mode 0600. Every save truncates and
// rewrites the whole file.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::traits::credential_store::{ApiCredentials, CredentialStore};

#[cfg(unix)]
const DIR_MODE: u32 = 0o700;

#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// File-based credential store
///
/// # Example
///
/// ```rust,no_run
/// use addrctl_core::credentials::FileCredentialStore;
/// use addrctl_core::traits::{ApiCredentials, CredentialStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = FileCredentialStore::new("/home/alice/.addrctl/credentials.json").await?;
///
///     let credentials = ApiCredentials::new("alice@example.com", "t0k3n")?;
///     store.save_credentials(&credentials).await?;
///
///     assert_eq!(store.get_credentials().await?, credentials);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Open a file credential store
    ///
    /// Creates the parent directory (owner-only on Unix) if it does not
    /// exist. The credential file itself is only created on save.
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                Self::create_settings_dir(parent).await.map_err(|e| {
                    Error::config(format!(
                        "Failed to create settings directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(Self { path })
    }

    /// Path of the credential file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn create_settings_dir(dir: &Path) -> std::io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(DIR_MODE);
        builder.create(dir).await
    }

    async fn open_for_write(&self) -> std::io::Result<fs::File> {
        let mut options = fs::OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);
        options.open(&self.path).await
    }

    /// The mode passed to `open` only applies to newly created files
    #[cfg(unix)]
    async fn restrict_permissions(&self) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&self.path, std::fs::Permissions::from_mode(FILE_MODE)).await
    }

    #[cfg(not(unix))]
    async fn restrict_permissions(&self) -> std::io::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get_credentials(&self) -> Result<ApiCredentials> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::no_credentials(format!(
                    "There are no credentials stored at {:?}. Please log in first.",
                    self.path.display().to_string()
                )));
            }
            Err(e) => {
                return Err(Error::credentials(format!(
                    "Failed to read credentials from {:?}: {}",
                    self.path.display().to_string(),
                    e
                )));
            }
        };

        if content.is_empty() {
            return Err(Error::credentials(format!(
                "The credential file {:?} is empty",
                self.path.display().to_string()
            )));
        }

        let credentials: ApiCredentials = serde_json::from_slice(&content).map_err(|e| {
            Error::credentials(format!(
                "Failed to parse credential file {:?}: {}",
                self.path.display().to_string(),
                e
            ))
        })?;

        tracing::debug!("Loaded credentials for {}", credentials.email);
        Ok(credentials)
    }

    async fn save_credentials(&self, credentials: &ApiCredentials) -> Result<()> {
        let json = serde_json::to_vec(credentials)?;

        let mut file = self.open_for_write().await.map_err(|e| {
            Error::credentials(format!(
                "Failed to open {:?} for writing: {}",
                self.path.display().to_string(),
                e
            ))
        })?;

        file.write_all(&json).await.map_err(|e| {
            Error::credentials(format!(
                "Failed to write credentials to {:?}: {}",
                self.path.display().to_string(),
                e
            ))
        })?;

        file.flush().await?;
        drop(file);

        self.restrict_permissions().await?;

        tracing::debug!("Credentials written to {}", self.path.display());
        Ok(())
    }

    async fn delete_credentials(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!("Credentials removed from {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::no_credentials(format!(
                "There are no credentials stored at {:?}",
                self.path.display().to_string()
            ))),
            Err(e) => Err(Error::credentials(format!(
                "Deleting {:?} failed: {}",
                self.path.display().to_string(),
                e
            ))),
        }
    }
}
