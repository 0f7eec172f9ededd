//! Typed settings for the downloader.
//!
//! Responsibilities:
//! - Define the resolved [`Settings`] structure (splunk / app / ssl groups).
//! - Define the closed value sets for routines and package extensions.
//!
//! Does NOT handle:
//! - Settings resolution or precedence (see `loader` module).
//! - Password collection (the CLI prompts interactively; only the username
//!   travels through configuration).
//!
//! Invariants:
//! - `Settings` is immutable after resolution; nothing mutates it later.
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::loader::ConfigError;

/// Server-side appmaker routine selecting what the generated package contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    /// Index-time properties bundle, optionally including indexes.conf and
    /// props/transforms content.
    IndexTimeProperties,
    /// On-prem configuration bundle.
    OnPrem,
}

impl Routine {
    /// The user-facing name as accepted on the command line and in config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndexTimeProperties => "index_time_properties",
            Self::OnPrem => "on_prem",
        }
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Routine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index_time_properties" => Ok(Self::IndexTimeProperties),
            "on_prem" => Ok(Self::OnPrem),
            other => Err(ConfigError::InvalidValue {
                field: "routine".to_string(),
                message: format!(
                    "unknown routine '{other}' (expected index_time_properties or on_prem)"
                ),
            }),
        }
    }
}

/// Archive extension forced onto the downloaded package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Extension {
    Spl,
    TarGz,
    #[default]
    Tgz,
}

impl Extension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spl => "spl",
            Self::TarGz => "tar.gz",
            Self::Tgz => "tgz",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extension {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spl" => Ok(Self::Spl),
            "tar.gz" => Ok(Self::TarGz),
            "tgz" => Ok(Self::Tgz),
            other => Err(ConfigError::InvalidValue {
                field: "extension".to_string(),
                message: format!("unknown extension '{other}' (expected spl, tar.gz or tgz)"),
            }),
        }
    }
}

/// How the downloader will authenticate against the management endpoint.
///
/// A username (from any layer) selects session login even when a token is
/// also configured, matching the original tool's short-circuit rule.
#[derive(Debug, Clone)]
pub enum AuthMode {
    /// Username/password login producing a session key. The password is
    /// collected interactively by the CLI and never read from configuration.
    Session { username: String },
    /// Pre-issued bearer token passed through as-is.
    Token { token: SecretString },
}

/// Connection settings for the Splunk management endpoint.
#[derive(Debug, Clone)]
pub struct SplunkSettings {
    /// Full management URL, e.g. `https://splunk.example.com:8089`.
    pub host: String,
    pub auth: AuthMode,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// What to ask the appmaker for and where to put the result.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub routine: Routine,
    /// Include indexes.conf content (index_time_properties only).
    pub indexes: bool,
    /// Include props/transforms content (index_time_properties only).
    pub properties: bool,
    pub output: PathBuf,
    pub extension: Extension,
}

/// TLS behavior.
#[derive(Debug, Clone)]
pub struct SslSettings {
    /// Verify the server certificate. Off by default, as Splunk management
    /// ports commonly run with self-signed certificates.
    pub verify: bool,
}

/// Fully resolved configuration, built once per run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub splunk: SplunkSettings,
    pub app: AppSettings,
    pub ssl: SslSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routine_round_trip() {
        for routine in [Routine::IndexTimeProperties, Routine::OnPrem] {
            assert_eq!(routine.as_str().parse::<Routine>().unwrap(), routine);
        }
    }

    #[test]
    fn test_routine_rejects_unknown_name() {
        let err = "content_pack".parse::<Routine>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_extension_round_trip() {
        for extension in [Extension::Spl, Extension::TarGz, Extension::Tgz] {
            assert_eq!(extension.as_str().parse::<Extension>().unwrap(), extension);
        }
    }

    #[test]
    fn test_default_extension_is_tgz() {
        assert_eq!(Extension::default(), Extension::Tgz);
    }

    /// Test that a configured token is not exposed in Debug output.
    #[test]
    fn test_token_not_exposed_in_debug() {
        let auth = AuthMode::Token {
            token: SecretString::new("secret-token-12345".to_string().into()),
        };

        let debug_output = format!("{:?}", auth);

        assert!(
            !debug_output.contains("secret-token-12345"),
            "Debug output should not contain the token"
        );
        assert!(debug_output.contains("Token"));
    }

    #[test]
    fn test_session_username_visible_in_debug() {
        let auth = AuthMode::Session {
            username: "admin".to_string(),
        };
        assert!(format!("{:?}", auth).contains("admin"));
    }
}
