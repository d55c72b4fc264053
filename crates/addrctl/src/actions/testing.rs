//! Test doubles shared by the action tests

use addrctl_core::traits::{AddressRecord, DnsClient, DnsClientFactory, RecordChange};
use addrctl_core::{Error, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::input::{IpInput, read_token};

/// Build an address record
pub fn record(id: &str, name: &str, record_type: &str, content: &str) -> AddressRecord {
    AddressRecord {
        id: id.to_string(),
        name: name.to_string(),
        record_type: record_type.to_string(),
        content: content.to_string(),
        ttl: 600,
    }
}

/// In-memory DNS client for a single account
#[derive(Default)]
pub struct FakeClient {
    domains: Vec<String>,
    records: Mutex<Vec<AddressRecord>>,
    create_count: AtomicUsize,
    update_count: AtomicUsize,
    delete_count: AtomicUsize,
}

impl FakeClient {
    pub fn new(domains: &[&str], records: Vec<AddressRecord>) -> Arc<Self> {
        Arc::new(Self {
            domains: domains.iter().map(|d| d.to_string()).collect(),
            records: Mutex::new(records),
            ..Default::default()
        })
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

    pub fn mutation_count(&self) -> usize {
        self.create_count() + self.update_count() + self.delete_count()
    }

    pub fn records(&self) -> Vec<AddressRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsClient for FakeClient {
    async fn domains(&self) -> Result<Vec<String>> {
        Ok(self.domains.clone())
    }

    async fn records(&self, _domain: &str) -> Result<Vec<AddressRecord>> {
        Ok(self.records())
    }

    async fn create_record(&self, _domain: &str, change: &RecordChange) -> Result<AddressRecord> {
        let id = self.create_count.fetch_add(1, Ordering::SeqCst) + 100;
        let created = AddressRecord {
            id: id.to_string(),
            name: change.name.clone(),
            record_type: change.record_type.clone(),
            content: change.content.clone(),
            ttl: change.ttl,
        };
        self.records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_record(
        &self,
        _domain: &str,
        record_id: &str,
        change: &RecordChange,
    ) -> Result<AddressRecord> {
        self.update_count.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        let existing = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| Error::not_found(record_id.to_string()))?;
        existing.content = change.content.clone();
        Ok(existing.clone())
    }

    async fn delete_record(&self, _domain: &str, record_id: &str) -> Result<()> {
        self.delete_count.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().retain(|r| r.id != record_id);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

/// Factory handing out a shared [`FakeClient`], or failing like a
/// factory without stored credentials
pub struct FakeFactory {
    client: Option<Arc<FakeClient>>,
    create_count: AtomicUsize,
}

impl FakeFactory {
    pub fn with_client(client: Arc<FakeClient>) -> Arc<Self> {
        Arc::new(Self {
            client: Some(client),
            create_count: AtomicUsize::new(0),
        })
    }

    pub fn logged_out() -> Arc<Self> {
        Arc::new(Self {
            client: None,
            create_count: AtomicUsize::new(0),
        })
    }

    /// Number of create_client() calls
    pub fn create_count(&self) -> usize {
        self.create_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsClientFactory for FakeFactory {
    async fn create_client(&self) -> Result<Arc<dyn DnsClient>> {
        self.create_count.fetch_add(1, Ordering::SeqCst);
        match &self.client {
            Some(client) => Ok(client.clone() as Arc<dyn DnsClient>),
            None => Err(Error::no_credentials(
                "There are no credentials stored. Please log in first.",
            )),
        }
    }
}

pub fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Piped input with fixed content
#[derive(Debug, Default, Clone)]
pub struct FixedInput(pub Option<String>);

#[async_trait]
impl IpInput for FixedInput {
    async fn read_ip(&self) -> Option<String> {
        match &self.0 {
            Some(text) => read_token(text.as_bytes()).await.ok().flatten(),
            None => None,
        }
    }
}
