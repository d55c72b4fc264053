//! Action dispatch
//!
//! Picks the action named by the first argument and turns its result into
//! process output.

use addrctl_core::{CredentialStore, DnsClientFactory};
use std::process::ExitCode;
use std::sync::Arc;

use crate::actions::{
    Action, CreateAction, CreateOrUpdateAction, DeleteAction, ListAction, LoginAction,
    LogoutAction, UpdateAction,
};
use crate::input::IpInput;
use crate::usage;

/// Exit codes
///
/// - 0: Action succeeded
/// - 1: Usage error, unknown action or failed action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliExitCode {
    Success = 0,
    Failure = 1,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// What to print and how to exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// No action given: usage on stdout, failure exit
    Usage(String),
    /// Success message on stdout
    Success(String),
    /// Error message on stderr
    Failure(String),
}

impl Completion {
    pub fn exit_code(&self) -> CliExitCode {
        match self {
            Completion::Success(_) => CliExitCode::Success,
            Completion::Usage(_) | Completion::Failure(_) => CliExitCode::Failure,
        }
    }
}

/// The set of actions and the dispatcher over them
pub struct Cli {
    executable_name: String,
    actions: Vec<Box<dyn Action>>,
}

impl Cli {
    pub fn new(
        executable_name: impl Into<String>,
        store: Arc<dyn CredentialStore>,
        factory: Arc<dyn DnsClientFactory>,
        input: Arc<dyn IpInput>,
    ) -> Self {
        let actions: Vec<Box<dyn Action>> = vec![
            Box::new(LoginAction::new(store.clone())),
            Box::new(LogoutAction::new(store)),
            Box::new(ListAction::new(factory.clone())),
            Box::new(CreateAction::new(factory.clone(), input.clone())),
            Box::new(UpdateAction::new(factory.clone(), input.clone())),
            Box::new(DeleteAction::new(factory.clone())),
            Box::new(CreateOrUpdateAction::new(factory, input)),
        ];

        Self {
            executable_name: executable_name.into(),
            actions,
        }
    }

    pub fn actions(&self) -> &[Box<dyn Action>] {
        &self.actions
    }

    pub fn usage(&self) -> String {
        usage::render(&self.executable_name, env!("CARGO_PKG_VERSION"), self.actions())
    }

    fn find(&self, name: &str) -> Option<&dyn Action> {
        self.actions
            .iter()
            .find(|action| action.name() == name)
            .map(|action| action.as_ref())
    }

    /// Run the action named by `args[0]` with the remaining arguments
    pub async fn run(&self, args: &[String]) -> Completion {
        let Some((first, rest)) = args.split_first() else {
            return Completion::Usage(self.usage());
        };

        let name = first.trim().to_lowercase();
        let Some(action) = self.find(&name) else {
            return Completion::Failure(format!("Unknown action: {:?}", name));
        };

        tracing::debug!("Running action {}", name);

        match action.execute(rest).await {
            Ok(text) => Completion::Success(text),
            Err(e) => {
                tracing::debug!("Action {} failed: {:?}", name, e);
                Completion::Failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{FakeClient, FakeFactory, FixedInput, args};
    use addrctl_core::MemoryCredentialStore;

    fn cli(factory: Arc<FakeFactory>) -> Cli {
        Cli::new(
            "addrctl",
            Arc::new(MemoryCredentialStore::new()),
            factory,
            Arc::new(FixedInput(None)),
        )
    }

    #[tokio::test]
    async fn test_no_arguments_prints_usage() {
        let completion = cli(FakeFactory::logged_out()).run(&[]).await;

        assert!(matches!(completion, Completion::Usage(ref text) if text.contains("Actions:")));
        assert_eq!(completion.exit_code(), CliExitCode::Failure);
    }

    #[tokio::test]
    async fn test_unknown_action() {
        let completion = cli(FakeFactory::logged_out())
            .run(&args(&["Frobnicate"]))
            .await;

        assert_eq!(
            completion,
            Completion::Failure("Unknown action: \"frobnicate\"".to_string())
        );
    }

    #[tokio::test]
    async fn test_action_name_is_case_insensitive() {
        let client = FakeClient::new(&["example.com"], vec![]);
        let completion = cli(FakeFactory::with_client(client.clone()))
            .run(&args(&[" CREATE ", "-domain", "example.com", "-ip", "127.0.0.1"]))
            .await;

        assert_eq!(
            completion,
            Completion::Success("Created: example.com → 127.0.0.1".to_string())
        );
        assert_eq!(completion.exit_code(), CliExitCode::Success);
        assert_eq!(client.create_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_goes_to_stderr() {
        let completion = cli(FakeFactory::logged_out())
            .run(&args(&["update", "-ip", "127.0.0.1"]))
            .await;

        assert_eq!(
            completion,
            Completion::Failure("No domain supplied".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let store = Arc::new(MemoryCredentialStore::new());
        let cli = Cli::new(
            "addrctl",
            store.clone(),
            FakeFactory::logged_out(),
            Arc::new(FixedInput(None)),
        );

        let completion = cli
            .run(&args(&["login", "-email", "alice@example.com", "-apitoken", "t0k3n"]))
            .await;
        assert_eq!(completion, Completion::Success("Login succeeded".to_string()));
        assert!(!store.is_empty().await);

        let completion = cli.run(&args(&["logout"])).await;
        assert_eq!(completion, Completion::Success("Logout succeeded".to_string()));
        assert!(store.is_empty().await);
    }
}
