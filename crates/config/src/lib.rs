//! Configuration management for the Splunk distributed configuration downloader.
//!
//! This crate provides typed settings and a layered loader that merges CLI
//! overrides, an optional JSON config file, environment variables, and
//! built-in defaults into a single immutable [`types::Settings`] value.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, SettingsLoader, env_var_or_none, parse_flag};
pub use types::{AppSettings, AuthMode, Extension, Routine, Settings, SplunkSettings, SslSettings};
