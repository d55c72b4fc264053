// # addrctl - DNS address record tool
//
// Thin command-line layer over addrctl-core. All validation and
// reconciliation logic lives in the library; this binary only:
// 1. Initializes logging and the runtime
// 2. Locates the settings directory and credential store
// 3. Dispatches to the action named by the first argument
// 4. Prints the result and sets the exit code
//
// ## Actions
//
// ```text
// addrctl login -email <addr> -apitoken <token>
// addrctl logout
// addrctl list [-domain <d>] [-subdomain <s>]
// addrctl create -domain <d> [-subdomain <s>] [-ip <addr>] [-ttl <seconds>]
// addrctl update -domain <d> [-subdomain <s>] [-ip <addr>]
// addrctl delete -domain <d> -subdomain <s> -type <A|AAAA>
// addrctl createorupdate -domain <d> [-subdomain <s>] [-ip <addr>] [-ttl <seconds>]
// ```
//
// ## Logging
//
// Logging is off by default so the printed result is the only output on
// stderr. Set `RUST_LOG=debug` to see every API request.

mod actions;
mod args;
mod cli;
mod input;
mod usage;

use addrctl_core::{FileCredentialStore, Settings};
use addrctl_provider_dnsimple::DnsimpleClientFactory;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::{Cli, CliExitCode, Completion};
use crate::input::StdinInput;

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "off";

fn main() -> ExitCode {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CliExitCode::Failure.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            return CliExitCode::Failure.into();
        }
    };

    let mut argv = std::env::args();
    let executable_name = argv
        .next()
        .as_deref()
        .and_then(|path| Path::new(path).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "addrctl".to_string());
    let args: Vec<String> = argv.collect();

    let completion = rt.block_on(async {
        let cli = match build_cli(&executable_name).await {
            Ok(cli) => cli,
            Err(e) => return Completion::Failure(format!("{:#}", e)),
        };
        cli.run(&args).await
    });

    match &completion {
        Completion::Usage(text) => print!("{}", text),
        Completion::Success(text) => println!("{}", text),
        Completion::Failure(text) => eprintln!("{}", text),
    }

    completion.exit_code().into()
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Wire the credential store and DNSimple factory into the dispatcher
async fn build_cli(executable_name: &str) -> Result<Cli> {
    let settings = Settings::locate().context("Unable to determine home directory")?;
    tracing::debug!("Using settings directory {}", settings.settings_dir.display());

    let store = Arc::new(
        FileCredentialStore::new(&settings.credentials_path)
            .await
            .context("Unable to prepare the credential store")?,
    );
    let factory = Arc::new(DnsimpleClientFactory::with_api_base(
        store.clone(),
        settings.api_base.clone(),
    ));

    Ok(Cli::new(
        executable_name,
        store,
        factory,
        Arc::new(StdinInput),
    ))
}
