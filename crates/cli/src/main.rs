//! splunk-dcd - export Splunk distributed configuration snapshots.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Resolve layered settings (CLI > config file > environment > defaults).
//! - Run the authenticate / makeapp / download pipeline and map failures to
//!   structured exit codes.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Settings merging rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE settings resolution so `.env` values are
//!   visible to the environment layer.
//! - Configuration failures abort before any network call.

mod args;
mod error;
mod interactive;
mod pipeline;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::Cli;
use dcd_config::{ConfigError, Settings, SettingsLoader};
use error::{ExitCode, ExitCodeExt};

/// Merge the configuration layers, lowest precedence first.
fn resolve_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let mut loader = SettingsLoader::new();

    if let Some(ref path) = cli.config {
        loader = loader.with_config_path(path.clone());
    }

    // Ascending precedence: environment, then config file, then CLI flags.
    loader = loader.from_env()?.from_file()?;

    if let Some(ref host) = cli.host {
        loader = loader.with_host(host.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref token) = cli.token {
        loader = loader.with_token(token.clone());
    }
    if let Some(routine) = cli.routine {
        loader = loader.with_routine(routine.into());
    }
    if let Some(indexes) = cli.indexes_flag() {
        loader = loader.with_indexes(indexes);
    }
    if let Some(properties) = cli.properties_flag() {
        loader = loader.with_properties(properties);
    }
    if let Some(ref output) = cli.output {
        loader = loader.with_output(output.clone());
    }
    if let Some(extension) = cli.extension {
        loader = loader.with_extension(extension.into());
    }
    if let Some(verify) = cli.verify_flag() {
        loader = loader.with_verify(verify);
    }
    if let Some(timeout) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout));
    }

    loader.build()
}

#[tokio::main]
async fn main() {
    // Load .env before settings resolution so the environment layer sees it
    if let Err(e) = SettingsLoader::new().load_dotenv() {
        eprintln!("[-] Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("[-] {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match pipeline::run(settings).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("[-] {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
