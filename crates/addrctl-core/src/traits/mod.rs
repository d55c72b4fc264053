//! Core traits for addrctl
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`DnsClient`]: Raw access to the DNS provider API
//! - [`InfoProvider`]: Look up existing records
//! - [`DnsEditor`]: Create, update and delete records
//! - [`CredentialStore`]: Persist the provider API credentials

pub mod credential_store;
pub mod dns_client;
pub mod dns_editor;
pub mod info_provider;

pub use credential_store::{ApiCredentials, CredentialStore};
pub use dns_client::{AddressRecord, DnsClient, DnsClientFactory, RecordChange};
pub use dns_editor::DnsEditor;
pub use info_provider::InfoProvider;
