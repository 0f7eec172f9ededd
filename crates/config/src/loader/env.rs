//! Environment variable parsing for settings.
//!
//! Responsibilities:
//! - Read and parse the `SPLUNK_DCD_*` / `APP_DCD_*` / `SSL_DCD_*` variables.
//! - Apply environment values to a `SettingsLoader` instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Boolean variables go through the shared truth table (`parse_flag`), so
//!   any unrecognized value is false rather than an error.
//! - Invalid routine/extension/timeout values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::SettingsLoader;
use super::error::ConfigError;
use super::parse_flag;
use crate::types::{Extension, Routine};

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut SettingsLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none("SPLUNK_DCD_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(username) = env_var_or_none("SPLUNK_DCD_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(token) = env_var_or_none("SPLUNK_DCD_TOKEN") {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if let Some(routine) = env_var_or_none("APP_DCD_ROUTINE") {
        let parsed: Routine = routine.parse().map_err(|_| ConfigError::InvalidValue {
            field: "APP_DCD_ROUTINE".to_string(),
            message: "must be index_time_properties or on_prem".to_string(),
        })?;
        loader.set_routine(Some(parsed));
    }
    if let Some(indexes) = env_var_or_none("SPLUNK_DCD_INDEXES") {
        loader.set_indexes(Some(parse_flag(&indexes)));
    }
    if let Some(properties) = env_var_or_none("SPLUNK_DCD_PROPERTIES") {
        loader.set_properties(Some(parse_flag(&properties)));
    }
    if let Some(output) = env_var_or_none("APP_DCD_OUTPUT") {
        loader.set_output(Some(PathBuf::from(output)));
    }
    if let Some(extension) = env_var_or_none("APP_DCD_EXTENSION") {
        let parsed: Extension = extension.parse().map_err(|_| ConfigError::InvalidValue {
            field: "APP_DCD_EXTENSION".to_string(),
            message: "must be spl, tar.gz or tgz".to_string(),
        })?;
        loader.set_extension(Some(parsed));
    }
    if let Some(verify) = env_var_or_none("SSL_DCD_VERIFY") {
        loader.set_verify(Some(parse_flag(&verify)));
    }
    if let Some(timeout) = env_var_or_none("SPLUNK_DCD_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            field: "SPLUNK_DCD_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
