use addrctl_core::{DnsClientFactory, RecordReconciler, Result};
use async_trait::async_trait;
use std::sync::Arc;

use super::create::CreateFlags;
use super::{Action, editor_pair, report};
use crate::args::{flag_help, parse_flags};
use crate::input::IpInput;

/// Update an address record, creating it first if necessary
pub struct CreateOrUpdateAction {
    factory: Arc<dyn DnsClientFactory>,
    input: Arc<dyn IpInput>,
}

impl CreateOrUpdateAction {
    pub fn new(factory: Arc<dyn DnsClientFactory>, input: Arc<dyn IpInput>) -> Self {
        Self { factory, input }
    }
}

#[async_trait]
impl Action for CreateOrUpdateAction {
    fn name(&self) -> &'static str {
        "createorupdate"
    }

    fn description(&self) -> &'static str {
        "Create or update an address record"
    }

    fn usage(&self) -> String {
        flag_help::<CreateFlags>(self.name())
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let flags: CreateFlags = parse_flags(self.name(), args)?;
        let state = flags.desired_state(self.input.as_ref()).await?;

        let (info, editor) = editor_pair(self.factory.as_ref()).await?;
        let outcome = RecordReconciler::new(&info, &editor)
            .create_or_update(&state)
            .await?;

        report(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{FakeClient, FakeFactory, FixedInput, args, record};
    use addrctl_core::Error;

    fn action(client: Arc<FakeClient>) -> CreateOrUpdateAction {
        CreateOrUpdateAction::new(FakeFactory::with_client(client), Arc::new(FixedInput(None)))
    }

    #[tokio::test]
    async fn test_creates_then_updates() {
        let client = FakeClient::new(&["example.com"], vec![]);
        let action = action(client.clone());

        let text = action
            .execute(&args(&["-domain", "example.com", "-subdomain", "home", "-ip", "10.0.0.4"]))
            .await
            .unwrap();
        assert_eq!(text, "Created: home.example.com → 10.0.0.4");

        let text = action
            .execute(&args(&["-domain", "example.com", "-subdomain", "home", "-ip", "10.0.0.5"]))
            .await
            .unwrap();
        assert_eq!(text, "Updated: home.example.com → 10.0.0.5");

        let err = action
            .execute(&args(&["-domain", "example.com", "-subdomain", "home", "-ip", "10.0.0.5"]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoUpdateRequired(_)));

        assert_eq!(client.create_count(), 1);
        assert_eq!(client.update_count(), 1);
    }

    #[tokio::test]
    async fn test_root_takes_update_path() {
        let client = FakeClient::new(&["example.com"], vec![record("1", "", "A", "10.0.0.1")]);
        let action = action(client.clone());

        let text = action
            .execute(&args(&["-domain", "example.com", "-subdomain", "", "-ip", "10.0.0.5"]))
            .await
            .unwrap();
        assert_eq!(text, "Updated: example.com → 10.0.0.5");
        assert_eq!(client.create_count(), 0);

        // no root record of this type: still the update path
        let err = action
            .execute(&args(&["-domain", "example.com", "-ip", "2001:db8::5"]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RecordNotFound { .. }));
        assert_eq!(client.create_count(), 0);
    }
}
