//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` for hierarchical merging.
//! - Support loading from environment variables, a JSON config file, and
//!   direct builder methods (CLI overrides).
//! - Build the final `Settings` with defaults filled in and values validated.
//!
//! Does NOT handle:
//! - Environment variable parsing logic (delegated to env.rs).
//! - Config file parsing logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Callers apply layers in ascending precedence: `from_env()`, then
//!   `from_file()`, then `with_*` overrides. Each layer overwrites the last.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.
//! - A configured username selects session auth even when a token is present.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{
    AppSettings, AuthMode, Extension, Routine, Settings, SplunkSettings, SslSettings,
};

/// Settings loader that builds configuration from layered sources.
pub struct SettingsLoader {
    host: Option<String>,
    username: Option<String>,
    token: Option<SecretString>,
    routine: Option<Routine>,
    indexes: Option<bool>,
    properties: Option<bool>,
    output: Option<PathBuf>,
    extension: Option<Extension>,
    verify: Option<bool>,
    timeout: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    /// Create a new settings loader.
    pub fn new() -> Self {
        Self {
            host: None,
            username: None,
            token: None,
            routine: None,
            indexes: None,
            properties: None,
            output: None,
            extension: None,
            verify: None,
            timeout: None,
            config_path: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the `.env` file will not be loaded (useful for testing). Missing
    /// `.env` files are silently ignored.
    ///
    /// Error messages never include raw `.env` line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the config file path to load in `from_file()`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Read configuration from the config file, if a path was set.
    ///
    /// Config file values take precedence over environment variables, so
    /// this must be applied after `from_env()`. An unreadable or malformed
    /// file is a hard error; the run must abort before any network call.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Set the management URL.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the username for session login.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the appmaker routine.
    pub fn with_routine(mut self, routine: Routine) -> Self {
        self.routine = Some(routine);
        self
    }

    /// Set whether indexes.conf content is included.
    pub fn with_indexes(mut self, indexes: bool) -> Self {
        self.indexes = Some(indexes);
        self
    }

    /// Set whether props/transforms content is included.
    pub fn with_properties(mut self, properties: bool) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Set the output directory.
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the forced package extension.
    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Set whether to verify the server TLS certificate.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = Some(verify);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final settings.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let host = self
            .host
            .as_deref()
            .map(validate_and_normalize_host)
            .transpose()?
            .ok_or(ConfigError::MissingHost)?;

        // A username selects session login; otherwise fall back to a token.
        let auth = if let Some(username) = self.username {
            AuthMode::Session { username }
        } else if let Some(token) = self.token {
            AuthMode::Token { token }
        } else {
            return Err(ConfigError::MissingAuth);
        };

        let routine = self.routine.ok_or(ConfigError::MissingRoutine)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        Ok(Settings {
            splunk: SplunkSettings {
                host,
                auth,
                timeout,
            },
            app: AppSettings {
                routine,
                indexes: self.indexes.unwrap_or(false),
                properties: self.properties.unwrap_or(false),
                output: self
                    .output
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
                extension: self.extension.unwrap_or_default(),
            },
            ssl: SslSettings {
                verify: self.verify.unwrap_or(false),
            },
        })
    }

    /// Validates the request timeout: greater than zero, bounded above.
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();

        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by the env/file loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_token(&mut self, token: Option<SecretString>) {
        self.token = token;
    }

    pub(crate) fn set_routine(&mut self, routine: Option<Routine>) {
        self.routine = routine;
    }

    pub(crate) fn set_indexes(&mut self, indexes: Option<bool>) {
        self.indexes = indexes;
    }

    pub(crate) fn set_properties(&mut self, properties: Option<bool>) {
        self.properties = properties;
    }

    pub(crate) fn set_output(&mut self, output: Option<PathBuf>) {
        self.output = output;
    }

    pub(crate) fn set_extension(&mut self, extension: Option<Extension>) {
        self.extension = extension;
    }

    pub(crate) fn set_verify(&mut self, verify: Option<bool>) {
        self.verify = verify;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

/// Validates and normalizes the management URL.
///
/// Validation rules:
/// - Trim surrounding whitespace; blank counts as missing.
/// - Parse as an absolute URL with an http or https scheme and a host.
/// - Normalize by stripping trailing slashes.
fn validate_and_normalize_host(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingHost);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        field: "host".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://localhost:{}): {e}",
            crate::constants::DEFAULT_SPLUNK_PORT
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            field: "host".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            field: "host".into(),
            message: "host is required (e.g. https://localhost:8089)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
