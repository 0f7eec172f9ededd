//! JSON config file loading.
//!
//! The config file is an optional JSON document mirroring the settings
//! groups:
//!
//! ```json
//! {
//!   "splunk": { "host": "https://splunk.example.com:8089", "username": "admin" },
//!   "app": { "routine": "index_time_properties", "indexes": "yes" },
//!   "ssl": { "verify": true }
//! }
//! ```
//!
//! All fields are optional. Boolean fields accept either JSON booleans or the
//! original tool's string flags; strings go through the shared truth table.
//! An unreadable or unparsable file is a hard error.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::SettingsLoader;
use super::error::ConfigError;
use super::parse_flag;
use crate::types::{Extension, Routine};

/// A boolean field that tolerates both JSON booleans and string flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Text(String),
}

impl FlagValue {
    fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => parse_flag(s),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SplunkSection {
    host: Option<String>,
    username: Option<String>,
    token: Option<String>,
    timeout: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AppSection {
    routine: Option<String>,
    indexes: Option<FlagValue>,
    properties: Option<FlagValue>,
    output: Option<String>,
    extension: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SslSection {
    verify: Option<FlagValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    splunk: SplunkSection,
    app: AppSection,
    ssl: SslSection,
}

/// Apply config file values to the loader, if a path was configured.
pub(crate) fn apply_file(loader: &mut SettingsLoader) -> Result<(), ConfigError> {
    let Some(path) = loader.config_path().cloned() else {
        return Ok(());
    };

    let raw = std::fs::read_to_string(&path)
        .map_err(|_| ConfigError::ConfigFileRead { path: path.clone() })?;
    let parsed: ConfigFile = serde_json::from_str(&raw)
        .map_err(|_| ConfigError::ConfigFileParse { path: path.clone() })?;
    tracing::debug!(path = %path.display(), "Loaded config file");

    if let Some(host) = parsed.splunk.host {
        loader.set_host(Some(host));
    }
    if let Some(username) = parsed.splunk.username {
        loader.set_username(Some(username));
    }
    if let Some(token) = parsed.splunk.token {
        loader.set_token(Some(secrecy::SecretString::new(token.into())));
    }
    if let Some(secs) = parsed.splunk.timeout {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(routine) = parsed.app.routine {
        let parsed_routine: Routine = routine.parse()?;
        loader.set_routine(Some(parsed_routine));
    }
    if let Some(indexes) = parsed.app.indexes {
        loader.set_indexes(Some(indexes.as_bool()));
    }
    if let Some(properties) = parsed.app.properties {
        loader.set_properties(Some(properties.as_bool()));
    }
    if let Some(output) = parsed.app.output {
        loader.set_output(Some(PathBuf::from(output)));
    }
    if let Some(extension) = parsed.app.extension {
        let parsed_extension: Extension = extension.parse()?;
        loader.set_extension(Some(parsed_extension));
    }
    if let Some(verify) = parsed.ssl.verify {
        loader.set_verify(Some(verify.as_bool()));
    }

    Ok(())
}
