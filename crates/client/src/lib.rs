//! Splunk distributed configuration management client.
//!
//! This crate wraps the REST calls behind the downloader workflow: session
//! or bearer authentication, app package generation via the appmaker
//! `makeapp` endpoint, and artifact retrieval via `downloadapp`.

mod auth;
mod client;
mod download;
pub mod endpoints;
mod error;
mod fs;
mod models;

pub use auth::{AuthStrategy, Credential};
pub use client::{DcdClient, DcdClientBuilder};
pub use download::derive_file_name;
pub use error::{ClientError, Result};
pub use fs::ensure_directory;
pub use models::{AppDescriptor, MakeAppParams, SplunkMessage, SplunkMessages};
