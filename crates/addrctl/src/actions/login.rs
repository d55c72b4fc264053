use addrctl_core::{ApiCredentials, CredentialStore, Result};
use async_trait::async_trait;
use clap::Parser;
use std::sync::Arc;

use super::Action;
use crate::args::{flag_help, parse_flags};

#[derive(Parser, Debug)]
struct LoginFlags {
    /// The e-mail address of the account to use
    #[arg(long)]
    email: Option<String>,

    /// The API token
    #[arg(long)]
    apitoken: Option<String>,
}

/// Save DNSimple API credentials
pub struct LoginAction {
    store: Arc<dyn CredentialStore>,
}

impl LoginAction {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Action for LoginAction {
    fn name(&self) -> &'static str {
        "login"
    }

    fn description(&self) -> &'static str {
        "Save DNSimple API credentials to disc"
    }

    fn usage(&self) -> String {
        flag_help::<LoginFlags>(self.name())
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let flags: LoginFlags = parse_flags(self.name(), args)?;

        let credentials = ApiCredentials::new(
            flags.email.unwrap_or_default(),
            flags.apitoken.unwrap_or_default(),
        )?;

        self.store.save_credentials(&credentials).await?;
        tracing::info!("Saved credentials for {}", credentials.email);

        Ok("Login succeeded".to_string())
    }
}
