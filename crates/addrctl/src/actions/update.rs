use addrctl_core::{DEFAULT_TTL, DesiredState, DnsClientFactory, RecordReconciler, Result};
use async_trait::async_trait;
use clap::Parser;
use std::sync::Arc;

use super::{Action, editor_pair, report, require_domain, resolve_ip};
use crate::args::{flag_help, parse_flags};
use crate::input::IpInput;

#[derive(Parser, Debug)]
struct UpdateFlags {
    /// Domain (e.g. example.com)
    #[arg(long)]
    domain: Option<String>,

    /// Subdomain (e.g. www)
    #[arg(long)]
    subdomain: Option<String>,

    /// IP address (e.g. ::1, 127.0.0.1); read from stdin if omitted
    #[arg(long)]
    ip: Option<String>,
}

/// Point an existing address record at a new IP
pub struct UpdateAction {
    factory: Arc<dyn DnsClientFactory>,
    input: Arc<dyn IpInput>,
}

impl UpdateAction {
    pub fn new(factory: Arc<dyn DnsClientFactory>, input: Arc<dyn IpInput>) -> Self {
        Self { factory, input }
    }
}

#[async_trait]
impl Action for UpdateAction {
    fn name(&self) -> &'static str {
        "update"
    }

    fn description(&self) -> &'static str {
        "Update an address record"
    }

    fn usage(&self) -> String {
        flag_help::<UpdateFlags>(self.name())
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let flags: UpdateFlags = parse_flags(self.name(), args)?;
        let domain = require_domain(flags.domain)?;
        let ip = resolve_ip(flags.ip, self.input.as_ref()).await?;

        // updates keep the record's TTL
        let state = DesiredState::new(domain, flags.subdomain.unwrap_or_default(), ip, DEFAULT_TTL);
        state.validate()?;

        let (info, editor) = editor_pair(self.factory.as_ref()).await?;
        let outcome = RecordReconciler::new(&info, &editor).update(&state).await?;

        report(outcome)
    }
}
