//! Info provider backed by a [`DnsClient`]

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::traits::{AddressRecord, DnsClient, InfoProvider};
use crate::validate::RecordType;

/// Answers record queries by listing a domain's records through the client
/// and filtering them locally.
#[derive(Clone)]
pub struct ClientInfoProvider {
    client: Arc<dyn DnsClient>,
}

impl ClientInfoProvider {
    /// Create an info provider for the given client
    pub fn new(client: Arc<dyn DnsClient>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for ClientInfoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientInfoProvider")
            .field("provider", &self.client.provider_name())
            .finish()
    }
}

#[async_trait]
impl InfoProvider for ClientInfoProvider {
    async fn subdomain_record(
        &self,
        domain: &str,
        subdomain: &str,
        record_type: RecordType,
    ) -> Result<Option<AddressRecord>> {
        tracing::debug!(
            "Looking up {} record for {:?} in {}",
            record_type,
            subdomain,
            domain
        );

        let records = self.client.records(domain).await?;
        let mut matching = records
            .into_iter()
            .filter(|record| record.matches(subdomain, record_type));

        let first = matching.next();
        if first.is_some() && matching.next().is_some() {
            tracing::warn!(
                "Multiple {} records found for {:?} in {}; using the first one",
                record_type,
                subdomain,
                domain
            );
        }

        Ok(first)
    }

    async fn subdomain_records(&self, domain: &str, subdomain: &str) -> Result<Vec<AddressRecord>> {
        let records = self.client.records(domain).await?;
        Ok(records
            .into_iter()
            .filter(|record| record.name == subdomain)
            .collect())
    }

    async fn all_records(&self, domain: &str) -> Result<Vec<AddressRecord>> {
        self.client.records(domain).await
    }

    async fn domain_names(&self) -> Result<Vec<String>> {
        self.client.domains().await
    }
}
