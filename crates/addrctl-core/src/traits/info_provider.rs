// # Info Provider Trait
//
// Read-only view of the provider's zones. The reconciler uses it to find the
// record a create/update/delete applies to; the `list` action uses it to
// enumerate domains and records.

use async_trait::async_trait;

use super::dns_client::AddressRecord;
use crate::validate::RecordType;

/// Trait for querying existing DNS records
#[async_trait]
pub trait InfoProvider: Send + Sync {
    /// Find the address record for a subdomain
    ///
    /// If more than one record matches, the first one in provider order is
    /// returned.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))`: a matching record exists
    /// - `Ok(None)`: no record with this name and type
    /// - `Err(Error)`: the lookup itself failed
    async fn subdomain_record(
        &self,
        domain: &str,
        subdomain: &str,
        record_type: RecordType,
    ) -> Result<Option<AddressRecord>, crate::Error>;

    /// All records of any type for a subdomain
    async fn subdomain_records(
        &self,
        domain: &str,
        subdomain: &str,
    ) -> Result<Vec<AddressRecord>, crate::Error>;

    /// All records of a domain
    async fn all_records(&self, domain: &str) -> Result<Vec<AddressRecord>, crate::Error>;

    /// Names of all domains in the account
    async fn domain_names(&self) -> Result<Vec<String>, crate::Error>;
}
