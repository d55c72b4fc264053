// # DNS Client Trait
//
// Defines the raw remote API capability: list domains, list records, and
// create/update/delete a single record.
//
// ## Implementations
//
// - DNSimple: `addrctl-provider-dnsimple` crate
//
// ## Usage
//
// ```rust,ignore
// use addrctl_core::traits::DnsClient;
//
// async fn print_zone(client: &dyn DnsClient) -> addrctl_core::Result<()> {
//     for record in client.records("example.com").await? {
//         println!("{} {} {}", record.name, record.record_type, record.content);
//     }
//     Ok(())
// }
// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::validate::RecordType;

/// A DNS record as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Provider-assigned record identifier
    pub id: String,
    /// Record label; empty for the root record
    pub name: String,
    /// Record type as reported by the provider (e.g. "A", "AAAA", "MX")
    pub record_type: String,
    /// Record value (the IP address for address records)
    pub content: String,
    /// Time-to-live in seconds
    pub ttl: u32,
}

impl AddressRecord {
    /// Whether this record is the given label with the given type
    pub fn matches(&self, name: &str, record_type: RecordType) -> bool {
        self.name == name && self.record_type == record_type.as_str()
    }
}

/// Payload of a create or update call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordChange {
    /// Record label; empty for the root record
    pub name: String,
    /// Record type
    pub record_type: String,
    /// New record value
    pub content: String,
    /// Time-to-live in seconds
    pub ttl: u32,
}

/// Trait for remote DNS API clients
///
/// A client performs exactly one HTTP exchange per method call. It does not
/// validate input, retry, or decide whether a change is needed; those are
/// the reconciler's job.
#[async_trait]
pub trait DnsClient: Send + Sync {
    /// List the names of all domains in the account
    async fn domains(&self) -> Result<Vec<String>, crate::Error>;

    /// List all records of a domain, in provider order
    async fn records(&self, domain: &str) -> Result<Vec<AddressRecord>, crate::Error>;

    /// Create a record in the given domain
    ///
    /// # Returns
    ///
    /// The record as stored by the provider
    async fn create_record(
        &self,
        domain: &str,
        change: &RecordChange,
    ) -> Result<AddressRecord, crate::Error>;

    /// Replace the record with the given id
    async fn update_record(
        &self,
        domain: &str,
        record_id: &str,
        change: &RecordChange,
    ) -> Result<AddressRecord, crate::Error>;

    /// Delete the record with the given id
    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<(), crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}

/// Fallible constructor for DNS clients
///
/// Construction can fail before any network traffic, e.g. because the
/// stored credentials are missing or unreadable.
#[async_trait]
pub trait DnsClientFactory: Send + Sync {
    /// Create a client instance
    async fn create_client(&self) -> Result<Arc<dyn DnsClient>, crate::Error>;
}
