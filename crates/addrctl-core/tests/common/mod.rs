//! Test doubles and common utilities for reconciler contract tests
//!
//! The doubles count every call so tests can assert exactly how many
//! lookups and mutations an operation performed.

#![allow(dead_code)]

use addrctl_core::error::Result;
use addrctl_core::traits::{AddressRecord, DnsEditor, InfoProvider, RecordChange};
use addrctl_core::validate::RecordType;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Build an address record
pub fn record(id: &str, name: &str, record_type: &str, content: &str) -> AddressRecord {
    AddressRecord {
        id: id.to_string(),
        name: name.to_string(),
        record_type: record_type.to_string(),
        content: content.to_string(),
        ttl: 3600,
    }
}

/// An InfoProvider serving a fixed list of records for every domain
pub struct MockInfoProvider {
    records: Vec<AddressRecord>,
    lookup_count: Arc<AtomicUsize>,
}

impl MockInfoProvider {
    /// Provider with no records at all
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Provider serving the given records
    pub fn with_records(records: Vec<AddressRecord>) -> Self {
        Self {
            records,
            lookup_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of subdomain_record() calls
    pub fn lookup_count(&self) -> usize {
        self.lookup_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl InfoProvider for MockInfoProvider {
    async fn subdomain_record(
        &self,
        _domain: &str,
        subdomain: &str,
        record_type: RecordType,
    ) -> Result<Option<AddressRecord>> {
        self.lookup_count.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .iter()
            .find(|r| r.matches(subdomain, record_type))
            .cloned())
    }

    async fn subdomain_records(&self, _domain: &str, subdomain: &str) -> Result<Vec<AddressRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.name == subdomain)
            .cloned()
            .collect())
    }

    async fn all_records(&self, _domain: &str) -> Result<Vec<AddressRecord>> {
        Ok(self.records.clone())
    }

    async fn domain_names(&self) -> Result<Vec<String>> {
        Ok(vec!["example.com".to_string()])
    }
}

/// A mutation observed by [`RecordingEditor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create {
        domain: String,
        change: RecordChange,
    },
    Update {
        domain: String,
        record_id: String,
        change: RecordChange,
    },
    Delete {
        domain: String,
        record_id: String,
    },
}

/// A DnsEditor that records every call and always succeeds
#[derive(Default)]
pub struct RecordingEditor {
    create_count: Arc<AtomicUsize>,
    update_count: Arc<AtomicUsize>,
    delete_count: Arc<AtomicUsize>,
    mutations: Mutex<Vec<Mutation>>,
}

impl RecordingEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_count(&self) -> usize {
        self.create_count.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.update_count.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.delete_count.load(Ordering::SeqCst)
    }

    /// Total number of mutations of any kind
    pub fn mutation_count(&self) -> usize {
        self.create_count() + self.update_count() + self.delete_count()
    }

    /// All mutations in call order
    pub fn mutations(&self) -> Vec<Mutation> {
        self.mutations.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DnsEditor for RecordingEditor {
    async fn create_record(&self, domain: &str, change: &RecordChange) -> Result<AddressRecord> {
        self.create_count.fetch_add(1, Ordering::SeqCst);
        self.mutations.lock().unwrap().push(Mutation::Create {
            domain: domain.to_string(),
            change: change.clone(),
        });

        Ok(AddressRecord {
            id: "new".to_string(),
            name: change.name.clone(),
            record_type: change.record_type.clone(),
            content: change.content.clone(),
            ttl: change.ttl,
        })
    }

    async fn update_record(
        &self,
        domain: &str,
        record_id: &str,
        change: &RecordChange,
    ) -> Result<AddressRecord> {
        self.update_count.fetch_add(1, Ordering::SeqCst);
        self.mutations.lock().unwrap().push(Mutation::Update {
            domain: domain.to_string(),
            record_id: record_id.to_string(),
            change: change.clone(),
        });

        Ok(AddressRecord {
            id: record_id.to_string(),
            name: change.name.clone(),
            record_type: change.record_type.clone(),
            content: change.content.clone(),
            ttl: change.ttl,
        })
    }

    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()> {
        self.delete_count.fetch_add(1, Ordering::SeqCst);
        self.mutations.lock().unwrap().push(Mutation::Delete {
            domain: domain.to_string(),
            record_id: record_id.to_string(),
        });
        Ok(())
    }
}
