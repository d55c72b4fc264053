//! Record reconciler
//!
//! The `RecordReconciler` decides which single mutation brings an address
//! record to the requested state, and performs it:
//! - Validating names, address and TTL before any remote call
//! - Looking up the existing record via `InfoProvider`
//! - Creating, updating or deleting it via `DnsEditor`
//!
//! ## Architecture
//!
//! ```text
//!                    DesiredState / DeleteTarget
//!                                │
//!                                ▼
//!                       ┌──────────────────┐
//!                       │ RecordReconciler │
//!                       └──────────────────┘
//!                                │
//!              ┌─────────────────┴─────────────────┐
//!              │                                   │
//!              ▼                                   ▼
//!      ┌──────────────┐                    ┌─────────────┐
//!      │ InfoProvider │                    │  DnsEditor  │
//!      │  (lookup)    │                    │  (mutate)   │
//!      └──────────────┘                    └─────────────┘
//! ```
//!
//! ## Decision Table
//!
//! | Operation          | Existing record           | Result                  |
//! |--------------------|---------------------------|-------------------------|
//! | create             | none                      | create → `Created`      |
//! | create             | present                   | `RecordAlreadyExists`   |
//! | update             | none                      | `RecordNotFound`        |
//! | update             | same address              | `Unchanged` (no call)   |
//! | update             | different address         | update → `Updated`      |
//! | delete             | none                      | `RecordNotFound`        |
//! | delete             | present                   | delete → `Deleted`      |
//! | create_or_update   | root subdomain            | update path             |
//! | create_or_update   | present                   | update path             |
//! | create_or_update   | none                      | create path             |

use std::fmt;
use std::net::IpAddr;

use crate::config::{DeleteTarget, DesiredState};
use crate::error::{Error, Result};
use crate::traits::{AddressRecord, DnsEditor, InfoProvider, RecordChange};
use crate::validate::{RecordType, qualified_name};
use tracing::{debug, info};

/// Result of a successful reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Record did not exist and was created
    Created {
        /// Fully qualified record name
        name: String,
        /// The new address
        ip: IpAddr,
    },
    /// Record existed with a different address and was updated
    Updated {
        /// Fully qualified record name
        name: String,
        /// The value the record held before
        previous: String,
        /// The new address
        ip: IpAddr,
    },
    /// Record already had the requested address (no-op)
    Unchanged {
        /// Fully qualified record name
        name: String,
        /// The current address
        ip: IpAddr,
    },
    /// Record was deleted
    Deleted {
        /// Fully qualified record name
        name: String,
        /// Type of the deleted record
        record_type: RecordType,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { name, ip } => write!(f, "Created: {} → {}", name, ip),
            Outcome::Updated { name, ip, .. } => write!(f, "Updated: {} → {}", name, ip),
            Outcome::Unchanged { name, ip } => write!(f, "Unchanged: {} → {}", name, ip),
            Outcome::Deleted { name, record_type } => {
                write!(f, "Deleted: {} ({})", name, record_type)
            }
        }
    }
}

/// Decides and performs address record mutations
///
/// The reconciler holds borrowed capabilities only; it keeps no state
/// between calls. Every successful call performs at most one mutation.
pub struct RecordReconciler<'a> {
    info: &'a dyn InfoProvider,
    editor: &'a dyn DnsEditor,
}

impl<'a> RecordReconciler<'a> {
    /// Create a reconciler over the given info provider and editor
    pub fn new(info: &'a dyn InfoProvider, editor: &'a dyn DnsEditor) -> Self {
        Self { info, editor }
    }

    /// Create an address record that must not exist yet
    ///
    /// # Errors
    ///
    /// - Validation errors for malformed input (no remote call)
    /// - `RecordAlreadyExists` if a record with this name and type exists
    pub async fn create(&self, state: &DesiredState) -> Result<Outcome> {
        let ttl = state.validate()?;
        let record_type = RecordType::for_ip(state.ip);

        let existing = self
            .info
            .subdomain_record(&state.domain, &state.subdomain, record_type)
            .await?;
        if existing.is_some() {
            return Err(Error::already_exists(
                record_type.as_str(),
                qualified_name(&state.subdomain, &state.domain),
            ));
        }

        self.create_unchecked(state, record_type, ttl).await
    }

    /// Point an existing address record at a new address
    ///
    /// The record keeps its name, type and TTL; only the value changes.
    ///
    /// # Errors
    ///
    /// - Validation errors for malformed input (no remote call)
    /// - `RecordNotFound` if no record with this name and type exists
    pub async fn update(&self, state: &DesiredState) -> Result<Outcome> {
        state.validate()?;
        let record_type = RecordType::for_ip(state.ip);
        let name = qualified_name(&state.subdomain, &state.domain);

        let existing = self
            .info
            .subdomain_record(&state.domain, &state.subdomain, record_type)
            .await?
            .ok_or_else(|| Error::record_not_found(record_type.as_str(), name.clone()))?;

        self.update_existing(state, existing).await
    }

    /// Delete an address record of an explicitly given type
    ///
    /// # Errors
    ///
    /// - Validation errors, including `InvalidRecordType` for anything but
    ///   "A" and "AAAA" (no remote call)
    /// - `RecordNotFound` if no record with this name and type exists
    pub async fn delete(&self, target: &DeleteTarget) -> Result<Outcome> {
        let record_type = target.validate()?;
        let name = qualified_name(&target.subdomain, &target.domain);

        let existing = self
            .info
            .subdomain_record(&target.domain, &target.subdomain, record_type)
            .await?
            .ok_or_else(|| Error::record_not_found(record_type.as_str(), name.clone()))?;

        self.editor
            .delete_record(&target.domain, &existing.id)
            .await?;

        Ok(Outcome::Deleted { name, record_type })
    }

    /// Update the record if it exists, otherwise create it
    ///
    /// The root record (empty subdomain) is assumed to exist and always
    /// takes the update path.
    pub async fn create_or_update(&self, state: &DesiredState) -> Result<Outcome> {
        let ttl = state.validate()?;

        if state.subdomain.is_empty() {
            debug!("Root record requested for {}; updating", state.domain);
            return self.update(state).await;
        }

        let record_type = RecordType::for_ip(state.ip);
        let existing = self
            .info
            .subdomain_record(&state.domain, &state.subdomain, record_type)
            .await?;

        match existing {
            Some(existing) => self.update_existing(state, existing).await,
            None => self.create_unchecked(state, record_type, ttl).await,
        }
    }

    async fn update_existing(
        &self,
        state: &DesiredState,
        existing: AddressRecord,
    ) -> Result<Outcome> {
        let name = qualified_name(&state.subdomain, &state.domain);
        let new_content = state.ip.to_string();

        if existing.content == new_content {
            info!("{} already points to {}", name, new_content);
            return Ok(Outcome::Unchanged { name, ip: state.ip });
        }

        let change = RecordChange {
            name: existing.name.clone(),
            record_type: existing.record_type.clone(),
            content: new_content,
            ttl: existing.ttl,
        };

        self.editor
            .update_record(&state.domain, &existing.id, &change)
            .await?;

        Ok(Outcome::Updated {
            name,
            previous: existing.content,
            ip: state.ip,
        })
    }

    async fn create_unchecked(
        &self,
        state: &DesiredState,
        record_type: RecordType,
        ttl: u32,
    ) -> Result<Outcome> {
        let change = RecordChange {
            name: state.subdomain.clone(),
            record_type: record_type.as_str().to_string(),
            content: state.ip.to_string(),
            ttl,
        };

        self.editor.create_record(&state.domain, &change).await?;

        Ok(Outcome::Created {
            name: qualified_name(&state.subdomain, &state.domain),
            ip: state.ip,
        })
    }
}
