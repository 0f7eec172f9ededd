//! Centralized constants for the splunk-dcd workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication.

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default output directory for downloaded app packages.
pub const DEFAULT_OUTPUT_DIR: &str = "./";

/// Default Splunk management port, used in error hints.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;
