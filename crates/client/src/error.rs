//! Error types for the Splunk client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// Every variant is fatal to the run; there is no partial-success state and
/// no retry of any stage.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed (HTTP status from the login endpoint).
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Splunk.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from Splunk.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Permission denied creating a directory or file.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Target path exists but is not a directory.
    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(String),

    /// I/O error writing the downloaded artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_status_and_url() {
        let err = ClientError::ApiError {
            status: 500,
            url: "https://localhost:8089/services/data/appmaker/makeapp".to_string(),
            message: "ERROR: boom".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("500"));
        assert!(rendered.contains("makeapp"));
        assert!(rendered.contains("boom"));
    }
}
