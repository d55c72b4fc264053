use addrctl_core::{DEFAULT_TTL, DesiredState, DnsClientFactory, RecordReconciler, Result};
use async_trait::async_trait;
use clap::Parser;
use std::sync::Arc;

use super::{Action, editor_pair, report, require_domain, resolve_ip};
use crate::args::{flag_help, parse_flags};
use crate::input::IpInput;

/// Flags shared by `create` and `createorupdate`
#[derive(Parser, Debug)]
pub(crate) struct CreateFlags {
    /// Domain (e.g. example.com)
    #[arg(long)]
    pub domain: Option<String>,

    /// Subdomain (e.g. www)
    #[arg(long)]
    pub subdomain: Option<String>,

    /// IP address (e.g. ::1, 127.0.0.1); read from stdin if omitted
    #[arg(long)]
    pub ip: Option<String>,

    /// The time to live in seconds
    #[arg(long, default_value_t = DEFAULT_TTL, allow_negative_numbers = true)]
    pub ttl: i64,
}

impl CreateFlags {
    /// Turn the flags into a validated desired state
    pub async fn desired_state(self, input: &dyn IpInput) -> Result<DesiredState> {
        let domain = require_domain(self.domain)?;
        let ip = resolve_ip(self.ip, input).await?;

        let state = DesiredState::new(domain, self.subdomain.unwrap_or_default(), ip, self.ttl);
        state.validate()?;
        Ok(state)
    }
}

/// Create an address record
pub struct CreateAction {
    factory: Arc<dyn DnsClientFactory>,
    input: Arc<dyn IpInput>,
}

impl CreateAction {
    pub fn new(factory: Arc<dyn DnsClientFactory>, input: Arc<dyn IpInput>) -> Self {
        Self { factory, input }
    }
}

#[async_trait]
impl Action for CreateAction {
    fn name(&self) -> &'static str {
        "create"
    }

    fn description(&self) -> &'static str {
        "Create an address record"
    }

    fn usage(&self) -> String {
        flag_help::<CreateFlags>(self.name())
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let flags: CreateFlags = parse_flags(self.name(), args)?;
        let state = flags.desired_state(self.input.as_ref()).await?;

        let (info, editor) = editor_pair(self.factory.as_ref()).await?;
        let outcome = RecordReconciler::new(&info, &editor).create(&state).await?;

        report(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{FakeClient, FakeFactory, FixedInput, args, record};
    use addrctl_core::Error;

    fn action(client: Arc<FakeClient>, stdin: Option<&str>) -> CreateAction {
        CreateAction::new(
            FakeFactory::with_client(client),
            Arc::new(FixedInput(stdin.map(str::to_string))),
        )
    }

    #[tokio::test]
    async fn test_create_new_record() {
        let client = FakeClient::new(&["example.com"], vec![]);
        let action = action(client.clone(), None);

        let text = action
            .execute(&args(&["-domain", "example.com", "-subdomain", "www", "-ip", "127.0.0.1"]))
            .await
            .unwrap();

        assert_eq!(text, "Created: www.example.com → 127.0.0.1");
        assert_eq!(client.create_count(), 1);

        let created = &client.records()[0];
        assert_eq!(created.record_type, "A");
        assert_eq!(created.ttl, 600);
    }

    #[tokio::test]
    async fn test_create_reads_ip_from_stdin() {
        let client = FakeClient::new(&["example.com"], vec![]);
        let action = action(client.clone(), Some("2001:db8::7\n"));

        let text = action
            .execute(&args(&["-domain", "example.com", "-subdomain", "v6", "-ttl", "60"]))
            .await
            .unwrap();

        assert_eq!(text, "Created: v6.example.com → 2001:db8::7");
        assert_eq!(client.records()[0].record_type, "AAAA");
        assert_eq!(client.records()[0].ttl, 60);
    }

    #[tokio::test]
    async fn test_create_existing_record_fails() {
        let client = FakeClient::new(&["example.com"], vec![record("1", "www", "A", "10.0.0.1")]);
        let action = action(client.clone(), None);

        let err = action
            .execute(&args(&["-domain", "example.com", "-subdomain", "www", "-ip", "127.0.0.1"]))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::RecordAlreadyExists { .. }));
        assert_eq!(client.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_create_input_errors_before_remote_access() {
        let factory = FakeFactory::logged_out();
        let action = CreateAction::new(factory.clone(), Arc::new(FixedInput(None)));

        let cases: [(&[&str], &str); 4] = [
            (&["-ip", "127.0.0.1"], "No domain supplied"),
            (&["-domain", "example.com"], "No IP address supplied"),
            (&["-domain", "example.com", "-ip", "1.2.3"], "Cannot parse IP \"1.2.3\""),
            (
                &["-domain", "example.com", "-ip", "127.0.0.1", "-ttl", "-1"],
                "The given TTL is invalid: -1",
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

    #[tokio::test]
    async fn test_create_without_credentials() {
        let action = CreateAction::new(FakeFactory::logged_out(), Arc::new(FixedInput(None)));

        let err = action
            .execute(&args(&["-domain", "example.com", "-ip", "127.0.0.1"]))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Cannot create DNS editor: "));
    }
}
