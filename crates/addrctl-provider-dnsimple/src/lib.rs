// # DNSimple DNS Client
//
// This crate provides the DNSimple API v1 implementation of
// `addrctl_core::traits::DnsClient`.
//
// ## Behavior
//
// - One HTTP request per trait method call
// - No retries, no caching, no background tasks
// - Non-2xx responses are mapped to typed errors:
//   401/403 → `Authentication`, 404 → `NotFound`, 429 → `RateLimited`,
//   5xx and everything else → `Provider`
// - No client-side timeout beyond reqwest's defaults
// - Domain names and record ids are percent-encoded as single path segments
//
// ## Security Requirements
//
// - The API token NEVER appears in logs or `Debug` output
// - Credentials come from a `CredentialStore`, read once per process
//
// ## API Reference
//
// - Authentication header: `X-DNSimple-Token: <email>:<token>`
// - List domains: GET `/domains`
// - List records: GET `/domains/:domain/records`
// - Create record: POST `/domains/:domain/records`
// - Update record: PUT `/domains/:domain/records/:id`
// - Delete record: DELETE `/domains/:domain/records/:id`

use addrctl_core::config::DEFAULT_API_BASE;
use addrctl_core::traits::{
    AddressRecord, ApiCredentials, CredentialStore, DnsClient, DnsClientFactory, RecordChange,
};
use addrctl_core::{Error, Result};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// Name used in logs and provider errors
pub const PROVIDER_NAME: &str = "dnsimple";

/// Header carrying `<email>:<token>`
pub const TOKEN_HEADER: &str = "X-DNSimple-Token";

/// DNSimple API v1 client
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the API token.
pub struct DnsimpleClient {
    /// Account credentials
    /// ⚠️ NEVER log the token
    credentials: ApiCredentials,

    /// API base URL; endpoint paths are appended as encoded segments
    base_url: Url,

    /// HTTP client for API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for DnsimpleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsimpleClient")
            .field("email", &self.credentials.email)
            .field("token", &"<REDACTED>")
            .field("api_base", &self.api_base())
            .finish()
    }
}

impl DnsimpleClient {
    /// Create a client for the public DNSimple API
    pub fn new(credentials: ApiCredentials) -> Result<Self> {
        Self::with_api_base(credentials, DEFAULT_API_BASE)
    }

    /// Create a client talking to a different base URL (used by tests)
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the credentials are blank
    /// - `Config` if the base URL cannot be parsed
    /// - `Http` if the HTTP client cannot be built
    pub fn with_api_base(credentials: ApiCredentials, api_base: impl Into<String>) -> Result<Self> {
        credentials.validate()?;

        let api_base = api_base.into();
        let base_url = Url::parse(&api_base)
            .map_err(|e| Error::config(format!("Invalid API base URL {:?}: {}", api_base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!("Invalid API base URL {:?}", api_base)));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            credentials,
            base_url,
            client,
        })
    }

    /// The base URL requests are sent to
    pub fn api_base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn token_header_value(&self) -> String {
        format!("{}:{}", self.credentials.email, self.credentials.token)
    }

    /// Base URL extended by `segments`, each percent-encoded as a single
    /// path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::invalid_input(format!(
                "Invalid path segment {:?}",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config(format!("Invalid API base URL {:?}", self.api_base())))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{} {}", method, url.path());

        Ok(self
            .client
            .request(method, url)
            .header(TOKEN_HEADER, self.token_header_value())
            .header(reqwest::header::ACCEPT, "application/json"))
    }

    /// Send a request and fail on any non-2xx status
    async fn send(&self, builder: RequestBuilder, context: &str) -> Result<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| Error::http(format!("{}: request failed: {}", context, e)))?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(status_error(response, context).await)
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        context: &str,
    ) -> Result<T> {
        let response = self.send(builder, context).await?;
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("{}: failed to read response: {}", context, e)))?;

        serde_json::from_str(&body).map_err(|e| {
            Error::provider(
                PROVIDER_NAME,
                format!("{}: failed to parse response: {}", context, e),
            )
        })
    }
}

/// Map a non-2xx response to an error
async fn status_error(response: Response, context: &str) -> Error {
    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read error response".to_string());

    tracing::warn!("{} returned {}", context, status);

    match status.as_u16() {
        401 | 403 => Error::auth(format!(
            "{}: invalid e-mail address or API token ({})",
            context, status
        )),
        404 => Error::not_found(format!("{}: {}", context, status)),
        429 => Error::rate_limited(format!(
            "{}: rate limit exceeded, please retry later ({})",
            context, status
        )),
        500..=599 => Error::provider(
            PROVIDER_NAME,
            format!("{}: DNSimple server error: {} - {}", context, status, error_text),
        ),
        _ => Error::provider(
            PROVIDER_NAME,
            format!("{}: {} - {}", context, status, error_text),
        ),
    }
}

#[derive(Debug, Deserialize)]
struct DomainEnvelope {
    domain: DomainData,
}

#[derive(Debug, Deserialize)]
struct DomainData {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RecordEnvelope {
    record: RecordData,
}

#[derive(Debug, Deserialize)]
struct RecordData {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    record_type: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    ttl: Option<u32>,
}

impl From<RecordData> for AddressRecord {
    fn from(data: RecordData) -> Self {
        AddressRecord {
            id: data.id,
            name: data.name.unwrap_or_default(),
            record_type: data.record_type,
            content: data.content.unwrap_or_default(),
            ttl: data.ttl.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RecordPayload<'a> {
    record: &'a RecordChange,
}

/// Record ids are numbers in the API but opaque strings to the rest of addrctl
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[async_trait]
impl DnsClient for DnsimpleClient {
    async fn domains(&self) -> Result<Vec<String>> {
        let envelopes: Vec<DomainEnvelope> = self
            .send_json(self.request(Method::GET, &["domains"])?, "Listing domains")
            .await?;

        Ok(envelopes.into_iter().map(|e| e.domain.name).collect())
    }

    async fn records(&self, domain: &str) -> Result<Vec<AddressRecord>> {
        let context = format!("Listing records of {}", domain);

        let builder = self.request(Method::GET, &["domains", domain, "records"])?;
        let envelopes: Vec<RecordEnvelope> = self
            .send_json(builder, &context)
            .await?;

        tracing::debug!("{} records in {}", envelopes.len(), domain);
        Ok(envelopes.into_iter().map(|e| e.record.into()).collect())
    }

    async fn create_record(&self, domain: &str, change: &RecordChange) -> Result<AddressRecord> {
        let context = format!("Creating record in {}", domain);

        let builder = self
            .request(Method::POST, &["domains", domain, "records"])?
            .json(&RecordPayload { record: change });
        let envelope: RecordEnvelope = self.send_json(builder, &context).await?;

        Ok(envelope.record.into())
    }

    async fn update_record(
        &self,
        domain: &str,
        record_id: &str,
        change: &RecordChange,
    ) -> Result<AddressRecord> {
        let context = format!("Updating record {} in {}", record_id, domain);

        let builder = self
            .request(Method::PUT, &["domains", domain, "records", record_id])?
            .json(&RecordPayload { record: change });
        let envelope: RecordEnvelope = self.send_json(builder, &context).await?;

        Ok(envelope.record.into())
    }

    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()> {
        let context = format!("Deleting record {} in {}", record_id, domain);

        let builder = self.request(Method::DELETE, &["domains", domain, "records", record_id])?;
        self.send(builder, &context).await?;
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

/// Factory building a [`DnsimpleClient`] from stored credentials
pub struct DnsimpleClientFactory {
    store: Arc<dyn CredentialStore>,
    api_base: String,
}

impl DnsimpleClientFactory {
    /// Factory for the public DNSimple API
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self::with_api_base(store, DEFAULT_API_BASE)
    }

    /// Factory for a different base URL
    pub fn with_api_base(store: Arc<dyn CredentialStore>, api_base: impl Into<String>) -> Self {
        Self {
            store,
            api_base: api_base.into(),
        }
    }
}

#[async_trait]
impl DnsClientFactory for DnsimpleClientFactory {
    async fn create_client(&self) -> Result<Arc<dyn DnsClient>> {
        let credentials = self.store.get_credentials().await?;
        let client = DnsimpleClient::with_api_base(credentials, self.api_base.clone())?;

        tracing::debug!("Created {:?}", client);
        Ok(Arc::new(client))
    }
}
