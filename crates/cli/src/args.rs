//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map clap value enums onto the config crate's types.
//!
//! Non-responsibilities:
//! - Does not resolve layered settings (see `main`); flags parsed here are
//!   only the highest-precedence layer.
//!
//! Invariants:
//! - Boolean options are tri-state: `--flag` sets true, `--no-flag` sets
//!   false, and absence defers to the config file / environment / default.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use dcd_config::{Extension, Routine};

#[derive(Parser)]
#[command(name = "splunk-dcd")]
#[command(about = "Export Splunk distributed configuration management app packages", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-dcd --host https://splunk.example.com:8089 -U admin -r index_time_properties --indexes\n  splunk-dcd -t $SPLUNK_DCD_TOKEN -r on_prem -o ./bundles -e spl\n  splunk-dcd --config ./dcd.json -r index_time_properties --no-properties\n"
)]
pub struct Cli {
    /// Splunk management URL (e.g., https://localhost:8089)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Username for session authentication (prompts for a password)
    #[arg(short = 'U', long)]
    pub username: Option<String>,

    /// Authentication token (bearer auth, used when no username is given)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Routine to execute
    #[arg(short = 'r', long, value_enum)]
    pub routine: Option<RoutineArg>,

    /// Include indexes.conf content (index_time_properties routine)
    #[arg(short = 'i', long, overrides_with = "no_indexes")]
    pub indexes: bool,

    /// Exclude indexes.conf content
    #[arg(long)]
    pub no_indexes: bool,

    /// Include props/transforms content (index_time_properties routine)
    #[arg(short = 'p', long, overrides_with = "no_properties")]
    pub properties: bool,

    /// Exclude props/transforms content
    #[arg(long)]
    pub no_properties: bool,

    /// Output directory for the downloaded package
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Extension for the downloaded file
    #[arg(short = 'e', long, value_enum)]
    pub extension: Option<ExtensionArg>,

    /// Verify the server TLS certificate
    #[arg(short = 'v', long, overrides_with = "no_verify")]
    pub verify: bool,

    /// Skip TLS certificate verification (the default)
    #[arg(long)]
    pub no_verify: bool,

    /// Path to a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Tri-state boolean resolution: `--flag` yields true, `--no-flag`
    /// yields false, neither defers to the lower configuration layers.
    fn tri_state(set: bool, unset: bool) -> Option<bool> {
        match (set, unset) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn indexes_flag(&self) -> Option<bool> {
        Self::tri_state(self.indexes, self.no_indexes)
    }

    pub fn properties_flag(&self) -> Option<bool> {
        Self::tri_state(self.properties, self.no_properties)
    }

    pub fn verify_flag(&self) -> Option<bool> {
        Self::tri_state(self.verify, self.no_verify)
    }
}

/// CLI-facing routine names.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoutineArg {
    #[value(name = "index_time_properties")]
    IndexTimeProperties,
    #[value(name = "on_prem")]
    OnPrem,
}

impl From<RoutineArg> for Routine {
    fn from(value: RoutineArg) -> Self {
        match value {
            RoutineArg::IndexTimeProperties => Routine::IndexTimeProperties,
            RoutineArg::OnPrem => Routine::OnPrem,
        }
    }
}

/// CLI-facing extension names.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExtensionArg {
    #[value(name = "spl")]
    Spl,
    #[value(name = "tar.gz")]
    TarGz,
    #[value(name = "tgz")]
    Tgz,
}

impl From<ExtensionArg> for Extension {
    fn from(value: ExtensionArg) -> Self {
        match value {
            ExtensionArg::Spl => Extension::Spl,
            ExtensionArg::TarGz => Extension::TarGz,
            ExtensionArg::Tgz => Extension::Tgz,
        }
    }
}
