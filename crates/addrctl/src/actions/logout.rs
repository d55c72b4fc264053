use addrctl_core::{CredentialStore, Error, Result};
use async_trait::async_trait;
use clap::Parser;
use std::sync::Arc;

use super::Action;
use crate::args::{flag_help, parse_flags};

#[derive(Parser, Debug)]
struct LogoutFlags {}

/// Remove stored DNSimple API credentials
pub struct LogoutAction {
    store: Arc<dyn CredentialStore>,
}

impl LogoutAction {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Action for LogoutAction {
    fn name(&self) -> &'static str {
        "logout"
    }

    fn description(&self) -> &'static str {
        "Remove any stored DNSimple API credentials from disc"
    }

    fn usage(&self) -> String {
        flag_help::<LogoutFlags>(self.name())
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let _: LogoutFlags = parse_flags(self.name(), args)?;

        match self.store.delete_credentials().await {
            Ok(()) => Ok("Logout succeeded".to_string()),
            Err(Error::NoCredentials(detail)) => {
                Err(Error::Other(format!("No logout required: {}", detail)))
            }
            Err(e) => Err(Error::Other(format!("Logout failed: {}", e))),
        }
    }
}
