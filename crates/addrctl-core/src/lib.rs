// # addrctl-core
//
// Core library for managing DNS address records (A/AAAA) through a DNS
// provider's REST API.
//
// ## Architecture Overview
//
// - **Validator** (`validate`): domain/subdomain predicates and IP → record type
// - **DnsClient**: Trait for the raw provider API
// - **InfoProvider** / **DnsEditor**: Read and write halves used by the reconciler
// - **RecordReconciler**: Decides whether to create, update, delete or leave a record alone
// - **CredentialStore**: Trait for persisting the API credentials
//
// ## Design Principles
//
// 1. **Validate first**: Malformed input never reaches the network
// 2. **One mutation**: Every successful operation performs at most one remote write
// 3. **Capabilities in, results out**: Remote access is injected through traits
// 4. **Library-First**: The CLI is a thin layer over this crate

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod reconciler;
pub mod traits;
pub mod validate;

// Re-export core types for convenience
pub use client::{ClientEditor, ClientInfoProvider};
pub use config::{DeleteTarget, DesiredState, Settings, DEFAULT_TTL};
pub use credentials::{FileCredentialStore, MemoryCredentialStore};
pub use error::{Error, Result};
pub use reconciler::{Outcome, RecordReconciler};
pub use traits::{
    AddressRecord, ApiCredentials, CredentialStore, DnsClient, DnsClientFactory, DnsEditor,
    InfoProvider, RecordChange,
};
pub use validate::{
    RecordType, is_valid_domain, is_valid_subdomain, qualified_name, validate_names,
};
