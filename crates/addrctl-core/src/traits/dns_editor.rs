// # DNS Editor Trait
//
// The mutating half of the remote API, as seen by the reconciler.

use async_trait::async_trait;

use super::dns_client::{AddressRecord, RecordChange};

/// Trait for performing record mutations
///
/// Editors execute exactly what they are told. Deciding *whether* to
/// create, update or delete is owned by `RecordReconciler`.
#[async_trait]
pub trait DnsEditor: Send + Sync {
    /// Create a record
    async fn create_record(
        &self,
        domain: &str,
        change: &RecordChange,
    ) -> Result<AddressRecord, crate::Error>;

    /// Replace an existing record
    async fn update_record(
        &self,
        domain: &str,
        record_id: &str,
        change: &RecordChange,
    ) -> Result<AddressRecord, crate::Error>;

    /// Delete an existing record
    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<(), crate::Error>;
}
