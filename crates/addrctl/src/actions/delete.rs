use addrctl_core::{DeleteTarget, DnsClientFactory, Error, RecordReconciler, Result};
use async_trait::async_trait;
use clap::Parser;
use std::sync::Arc;

use super::{Action, editor_pair, report, require_domain};
use crate::args::{flag_help, non_blank, parse_flags};

#[derive(Parser, Debug)]
struct DeleteFlags {
    /// Domain (e.g. example.com)
    #[arg(long)]
    domain: Option<String>,

    /// Subdomain (e.g. www)
    #[arg(long)]
    subdomain: Option<String>,

    /// The address record type (e.g. "AAAA")
    #[arg(long = "type")]
    record_type: Option<String>,
}

/// Delete an address record
pub struct DeleteAction {
    factory: Arc<dyn DnsClientFactory>,
}

impl DeleteAction {
    pub fn new(factory: Arc<dyn DnsClientFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl Action for DeleteAction {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn description(&self) -> &'static str {
        "Delete an address record"
    }

    fn usage(&self) -> String {
        flag_help::<DeleteFlags>(self.name())
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let flags: DeleteFlags = parse_flags(self.name(), args)?;

        let domain = require_domain(flags.domain)?;
        let subdomain =
            non_blank(flags.subdomain).ok_or_else(|| Error::invalid_input("No subdomain supplied"))?;
        let record_type = non_blank(flags.record_type)
            .ok_or_else(|| Error::invalid_input("No record type supplied"))?;

        let target = DeleteTarget::new(domain, subdomain, record_type);
        target.validate()?;

        let (info, editor) = editor_pair(self.factory.as_ref()).await?;
        let outcome = RecordReconciler::new(&info, &editor).delete(&target).await?;

        report(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{FakeClient, FakeFactory, args, record};

    #[tokio::test]
    async fn test_delete_record() {
        let client = FakeClient::new(
            &["example.com"],
            vec![
                record("1", "www", "A", "10.0.0.1"),
                record("2", "www", "AAAA", "2001:db8::1"),
            ],
        );
        let action = DeleteAction::new(FakeFactory::with_client(client.clone()));

        let text = action
            .execute(&args(&["-domain", "example.com", "-subdomain", "www", "-type", "AAAA"]))
            .await
            .unwrap();

        assert_eq!(text, "Deleted: www.example.com (AAAA)");
        assert_eq!(client.delete_count(), 1);
        assert_eq!(client.records().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_record() {
        let client = FakeClient::new(&["example.com"], vec![record("1", "www", "A", "10.0.0.1")]);
        let action = DeleteAction::new(FakeFactory::with_client(client.clone()));

        let err = action
            .execute(&args(&["-domain", "example.com", "-subdomain", "www", "-type", "AAAA"]))
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("No address record"));
        assert_eq!(client.delete_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_flag_errors() {
        let factory = FakeFactory::logged_out();
        let action = DeleteAction::new(factory.clone());

        let cases: [(&[&str], &str); 4] = [
            (&["-subdomain", "www", "-type", "A"], "No domain supplied"),
            (&["-domain", "example.com", "-type", "A"], "No subdomain supplied"),
            (&["-domain", "example.com", "-subdomain", "www"], "No record type supplied"),
            (
                &["-domain", "example.com", "-subdomain", "www", "-type", "MX"],
                "The given record type is invalid",
            ),
        ];

        for (flags, message) in cases {
            let err = action.execute(&args(flags)).await.unwrap_err();
            assert!(
                err.to_string().starts_with(message),
                "{:?} gave {:?}",
                flags,
                err.to_string()
            );
        }

        assert_eq!(factory.create_count(), 0);
    }
}
