//! Main client for the Splunk distributed configuration management API.
//!
//! Responsibilities:
//! - Build and hold the HTTP client (timeout, TLS verification policy).
//! - Expose the workflow operations: authenticate, make_app, download_app,
//!   and best-effort logout.
//!
//! Does NOT handle:
//! - Request dispatch and error mapping (see `endpoints`).
//! - Settings resolution (see the dcd-config crate).
//!
//! Invariants:
//! - One `reqwest::Client` is built per run and reused for every call;
//!   connections are closed by RAII on every exit path.
//! - The credential is passed explicitly to each call, never stored.

use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use dcd_config::constants::DEFAULT_TIMEOUT_SECS;
use dcd_config::{Extension, Settings};

use crate::auth::{AuthStrategy, Credential};
use crate::download::{derive_file_name, write_artifact};
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::fs::ensure_directory;
use crate::models::{AppDescriptor, MakeAppParams};

/// Builder for creating a new [`DcdClient`].
pub struct DcdClientBuilder {
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for DcdClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DcdClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the management URL of the Splunk server.
    ///
    /// This should include the protocol and port, e.g.
    /// `https://localhost:8089`. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// Only affects HTTPS connections; for HTTP URLs a warning is logged.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-configure the builder from resolved settings.
    pub fn from_settings(mut self, settings: &Settings) -> Self {
        self.base_url = Some(settings.splunk.host.clone());
        self.skip_verify = !settings.ssl.verify;
        self.timeout = settings.splunk.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`DcdClient`] with the configured options.
    pub fn build(self) -> Result<DcdClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(5));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections.
                tracing::warn!(
                    "TLS verification settings have no effect on http:// URLs"
                );
            }
        }

        let http = http_builder.build()?;

        Ok(DcdClient { http, base_url })
    }
}

/// Client for the Splunk distributed configuration management workflow.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use dcd_client::DcdClient;
///
/// let client = DcdClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct DcdClient {
    http: reqwest::Client,
    base_url: String,
}

impl DcdClient {
    /// Create a new client builder.
    pub fn builder() -> DcdClientBuilder {
        DcdClientBuilder::new()
    }

    /// Get the management URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an auth strategy into a credential.
    ///
    /// Bearer tokens short-circuit without any network call; session auth
    /// performs the login round trip and wraps the session key.
    pub async fn authenticate(&self, strategy: &AuthStrategy) -> Result<Credential> {
        match strategy {
            AuthStrategy::Bearer { token } => {
                debug!("Using bearer token authentication");
                Ok(Credential::Bearer(token.clone()))
            }
            AuthStrategy::Session { username, password } => {
                let key = endpoints::login(
                    &self.http,
                    &self.base_url,
                    username,
                    password.expose_secret(),
                )
                .await
                .map_err(|e| match e {
                    ClientError::ApiError {
                        status, message, ..
                    } => ClientError::AuthFailed(format!("HTTP {status}: {message}")),
                    other => other,
                })?;
                Ok(Credential::Session(SecretString::new(key.into())))
            }
        }
    }

    /// Request generation of an app package.
    pub async fn make_app(
        &self,
        credential: &Credential,
        params: &MakeAppParams,
    ) -> Result<AppDescriptor> {
        endpoints::make_app(&self.http, &self.base_url, credential, params).await
    }

    /// Download a generated app package into `output_dir`.
    ///
    /// Creates the directory if needed and forces `extension` onto the
    /// derived file name. Returns the path of the written file.
    pub async fn download_app(
        &self,
        credential: &Credential,
        app: &AppDescriptor,
        output_dir: &Path,
        extension: Extension,
    ) -> Result<PathBuf> {
        let output_dir = ensure_directory(output_dir)?;
        let (content_disposition, body) =
            endpoints::fetch_app(&self.http, &self.base_url, credential, app).await?;
        let name = derive_file_name(content_disposition.as_deref(), extension);
        write_artifact(&output_dir, &name, &body)
    }

    /// Best-effort session invalidation.
    ///
    /// Bearer credentials have no session to end. Failures are logged and
    /// swallowed: by this point the artifact is on disk and the run outcome
    /// must not change.
    pub async fn logout(&self, credential: &Credential) {
        let Some(session_key) = credential.session_key() else {
            return;
        };
        if let Err(e) = endpoints::logout(&self.http, &self.base_url, session_key).await {
            debug!("Session logout failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_missing_base_url() {
        let result = DcdClient::builder().build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = DcdClient::builder()
            .base_url("https://localhost:8089/".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://localhost:8089");
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        assert_eq!(
            DcdClientBuilder::normalize_base_url("https://example.com:8089//".to_string()),
            "https://example.com:8089"
        );
    }

    #[test]
    fn test_skip_verify_with_https_url() {
        let client = DcdClient::builder()
            .base_url("https://localhost:8089".to_string())
            .skip_verify(true)
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_skip_verify_with_http_url() {
        // Succeeds; skip_verify is simply ineffective without TLS.
        let client = DcdClient::builder()
            .base_url("http://localhost:8089".to_string())
            .skip_verify(true)
            .build();
        assert!(client.is_ok());
    }
}
