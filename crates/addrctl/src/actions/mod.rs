//! Command-line actions
//!
//! Each action parses its own flags, validates them, builds whatever remote
//! capability it needs and returns the text to print on success.

mod create;
mod create_or_update;
mod delete;
mod list;
mod login;
mod logout;
mod update;

#[cfg(test)]
pub(crate) mod testing;

pub use create::CreateAction;
pub use create_or_update::CreateOrUpdateAction;
pub use delete::DeleteAction;
pub use list::ListAction;
pub use login::LoginAction;
pub use logout::LogoutAction;
pub use update::UpdateAction;

use addrctl_core::config::parse_ip;
use addrctl_core::{
    ClientEditor, ClientInfoProvider, DnsClientFactory, Error, Outcome, Result,
};
use async_trait::async_trait;
use std::net::IpAddr;

use crate::args::non_blank;
use crate::input::IpInput;

/// A named subcommand
#[async_trait]
pub trait Action: Send + Sync {
    /// Name used on the command line (lower case)
    fn name(&self) -> &'static str;

    /// One-line description for the usage text
    fn description(&self) -> &'static str;

    /// Help text for the action's flags
    fn usage(&self) -> String;

    /// Run the action with the arguments following its name
    async fn execute(&self, args: &[String]) -> Result<String>;
}

/// Require a non-blank domain flag
pub(crate) fn require_domain(domain: Option<String>) -> Result<String> {
    non_blank(domain).ok_or_else(|| Error::invalid_input("No domain supplied"))
}

/// Take the IP from the flag, falling back to piped input
pub(crate) async fn resolve_ip(flag: Option<String>, input: &dyn IpInput) -> Result<IpAddr> {
    let raw = match non_blank(flag) {
        Some(raw) => raw,
        None => input.read_ip().await.unwrap_or_default(),
    };

    parse_ip(&raw)
}

/// Build the editor and info provider sharing one client
pub(crate) async fn editor_pair(
    factory: &dyn DnsClientFactory,
) -> Result<(ClientInfoProvider, ClientEditor)> {
    let client = factory
        .create_client()
        .await
        .map_err(|e| Error::Other(format!("Cannot create DNS editor: {}", e)))?;

    Ok((
        ClientInfoProvider::new(client.clone()),
        ClientEditor::new(client),
    ))
}

/// Render a reconciliation outcome for the terminal
///
/// `Unchanged` is reported as a failure so scripts can tell that nothing
/// was written.
pub(crate) fn report(outcome: Outcome) -> Result<String> {
    match outcome {
        Outcome::Unchanged { ip, .. } => Err(Error::NoUpdateRequired(ip.to_string())),
        other => Ok(other.to_string()),
    }
}
