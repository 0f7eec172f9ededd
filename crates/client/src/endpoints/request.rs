//! Shared request dispatch for endpoint calls.
//!
//! Sends a request and maps non-success responses to
//! [`ClientError::ApiError`], parsing Splunk `messages[]` bodies for a
//! cleaner display. There is deliberately no retry logic here: the workflow
//! is single-shot and every failure is fatal.

use reqwest::{RequestBuilder, Response};

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Send an HTTP request and surface non-2xx responses as `ApiError`.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Try to parse Splunk error messages for a cleaner display
    let message = if let Ok(m) = serde_json::from_str::<SplunkMessages>(&body) {
        m.messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; ")
    } else {
        body
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
