//! Error types for settings resolution.
//!
//! Invariants:
//! - All variants include enough context to act on (field names, paths).
//! - Dotenv errors never include raw `.env` line contents, so secrets cannot
//!   leak through error messages.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Splunk management URL is required. Pass --host or set SPLUNK_DCD_HOST.")]
    MissingHost,

    #[error("Authentication is required (either a username for session login or a token)")]
    MissingAuth,

    #[error("Routine is required. Pass --routine or set APP_DCD_ROUTINE.")]
    MissingRoutine,

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("Failed to read config file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse { path: PathBuf },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is reported, not the offending
    /// line content.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
