//! Authentication endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};

/// Login to Splunk with username and password, returning the session key.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<String> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client
        .post(&url)
        .form(&[("username", username), ("password", password)])
        .query(&[("output_mode", "json")]);
    let response = send_request(builder).await?;

    let splunk_resp: serde_json::Value = response.json().await?;

    splunk_resp["sessionKey"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| ClientError::InvalidResponse("Missing sessionKey in response".to_string()))
}

/// Invalidate a session key.
pub async fn logout(client: &Client, base_url: &str, session_key: &str) -> Result<()> {
    debug!("Logging out of Splunk session");

    let url = format!(
        "{}/services/authentication/httpauth-tokens/{}",
        base_url, session_key
    );
    let builder = client
        .delete(&url)
        .header("Authorization", format!("Splunk {}", session_key));
    send_request(builder).await?;
    Ok(())
}
