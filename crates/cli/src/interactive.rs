//! User interaction utilities for the CLI.

use anyhow::Result;
use secrecy::SecretString;

/// Prompt for the Splunk password without echoing input.
pub fn prompt_password() -> Result<SecretString> {
    let password = dialoguer::Password::new()
        .with_prompt("[?] Splunk Password")
        .interact()?;
    Ok(SecretString::new(password.into()))
}
