//! DNS editor backed by a [`DnsClient`]

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::traits::{AddressRecord, DnsClient, DnsEditor, RecordChange};

/// Forwards mutations to the client, one API call each, and logs them.
#[derive(Clone)]
pub struct ClientEditor {
    client: Arc<dyn DnsClient>,
}

impl ClientEditor {
    /// Create an editor for the given client
    pub fn new(client: Arc<dyn DnsClient>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for ClientEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientEditor")
            .field("provider", &self.client.provider_name())
            .finish()
    }
}

#[async_trait]
impl DnsEditor for ClientEditor {
    async fn create_record(&self, domain: &str, change: &RecordChange) -> Result<AddressRecord> {
        tracing::info!(
            "Creating {} record {:?} in {} -> {} (ttl {}) via {}",
            change.record_type,
            change.name,
            domain,
            change.content,
            change.ttl,
            self.client.provider_name()
        );

        let created = self.client.create_record(domain, change).await?;
        tracing::debug!("Created record id {}", created.id);
        Ok(created)
    }

    async fn update_record(
        &self,
        domain: &str,
        record_id: &str,
        change: &RecordChange,
    ) -> Result<AddressRecord> {
        tracing::info!(
            "Updating {} record {:?} (id {}) in {} -> {} via {}",
            change.record_type,
            change.name,
            record_id,
            domain,
            change.content,
            self.client.provider_name()
        );

        self.client.update_record(domain, record_id, change).await
    }

    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()> {
        tracing::info!(
            "Deleting record id {} in {} via {}",
            record_id,
            domain,
            self.client.provider_name()
        );

        self.client.delete_record(domain, record_id).await
    }
}
