//! Shared test utilities for splunk-dcd integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (token, routine).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `SPLUNK_DCD_TOKEN` and `APP_DCD_ROUTINE` are set to dummy values unless
//!   overridden, so most tests only have to supply a host.

use assert_cmd::Command;

/// Returns a hermetic `splunk-dcd` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - A dummy token and routine satisfy config validation.
/// - Other configuration env vars are cleared to avoid host leakage.
pub fn dcd_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-dcd");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Satisfy configuration requirements for most tests
    cmd.env("SPLUNK_DCD_TOKEN", "test-token");
    cmd.env("APP_DCD_ROUTINE", "on_prem");

    // Clear potential host leakage
    cmd.env_remove("SPLUNK_DCD_HOST")
        .env_remove("SPLUNK_DCD_USERNAME")
        .env_remove("SPLUNK_DCD_INDEXES")
        .env_remove("SPLUNK_DCD_PROPERTIES")
        .env_remove("SPLUNK_DCD_TIMEOUT")
        .env_remove("APP_DCD_OUTPUT")
        .env_remove("APP_DCD_EXTENSION")
        .env_remove("SSL_DCD_VERIFY");

    cmd
}

/// Returns a hermetic `splunk-dcd` command with a specific management URL.
#[allow(dead_code)]
pub fn dcd_cmd_with_host(host: &str) -> Command {
    let mut cmd = dcd_cmd();
    cmd.env("SPLUNK_DCD_HOST", host);
    cmd
}
