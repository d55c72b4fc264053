use addrctl_core::{AddressRecord, ClientInfoProvider, DnsClientFactory, Error, InfoProvider, Result};
use async_trait::async_trait;
use clap::Parser;
use std::sync::Arc;

use super::Action;
use crate::args::{flag_help, non_blank, parse_flags};

/// Spaces between table columns
const COLUMN_PADDING: usize = 3;

#[derive(Parser, Debug)]
struct ListFlags {
    /// Domain (optional)
    #[arg(long)]
    domain: Option<String>,

    /// Subdomain (optional)
    #[arg(long)]
    subdomain: Option<String>,
}

/// List domains or DNS records
pub struct ListAction {
    factory: Arc<dyn DnsClientFactory>,
}

impl ListAction {
    pub fn new(factory: Arc<dyn DnsClientFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl Action for ListAction {
    fn name(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "List all available domains, subdomains or DNS records"
    }

    fn usage(&self) -> String {
        flag_help::<ListFlags>(self.name())
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let flags: ListFlags = parse_flags(self.name(), args)?;

        let client = self
            .factory
            .create_client()
            .await
            .map_err(|e| Error::Other(format!("No DNS info provider available: {}", e)))?;
        let info = ClientInfoProvider::new(client);

        match (non_blank(flags.domain), non_blank(flags.subdomain)) {
            (Some(domain), Some(subdomain)) => {
                let records = info
                    .subdomain_records(&domain, &subdomain)
                    .await
                    .map_err(|e| {
                        Error::Other(format!(
                            "Unable to fetch DNS records for subdomain {}.{}: {}",
                            subdomain, domain, e
                        ))
                    })?;
                Ok(format_records(&records, &domain))
            }
            (Some(domain), None) => {
                let records = info.all_records(&domain).await.map_err(|e| {
                    Error::Other(format!(
                        "Unable to fetch DNS records for domain {}: {}",
                        domain, e
                    ))
                })?;
                Ok(format_records(&records, &domain))
            }
            (None, subdomain) => {
                if subdomain.is_some() {
                    tracing::warn!("Ignoring -subdomain without -domain");
                }

                let names = info.domain_names().await.map_err(|e| {
                    Error::Other(format!("Unable to retrieve domain names: {}", e))
                })?;
                Ok(names.join("\n"))
            }
        }
    }
}

/// Format records as an aligned `name  type  value` table
///
/// Each column but the last is as wide as its widest cell plus padding.
/// Root records show the bare domain. There is no trailing newline.
pub fn format_records(records: &[AddressRecord], domain: &str) -> String {
    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|record| {
            let name = if record.name.trim().is_empty() {
                domain.to_string()
            } else {
                format!("{}.{}", record.name, domain)
            };
            [name, record.record_type.clone(), record.content.clone()]
        })
        .collect();

    let width = |column: usize| {
        rows.iter()
            .map(|row| row[column].chars().count())
            .max()
            .unwrap_or(0)
            + COLUMN_PADDING
    };
    let (name_width, type_width) = (width(0), width(1));

    rows.iter()
        .map(|[name, record_type, content]| {
            format!(
                "{:<name_width$}{:<type_width$}{}",
                name, record_type, content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
