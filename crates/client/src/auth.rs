//! Authentication strategies and credentials.

use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password login. The client exchanges these for a session
    /// key once, at the start of the run.
    Session {
        username: String,
        password: SecretString,
    },
    /// Pre-issued bearer token. Resolving this requires no network call.
    Bearer { token: SecretString },
}

/// A resolved credential, ready to be sent as an `Authorization` header.
///
/// Exactly one credential is produced per run and passed explicitly to each
/// subsequent call; nothing caches or renews it.
#[derive(Debug, Clone)]
pub enum Credential {
    /// `Authorization: Bearer <token>`
    Bearer(SecretString),
    /// `Authorization: Splunk <sessionKey>`
    Session(SecretString),
}

impl Credential {
    /// Render the `Authorization` header value.
    pub fn header_value(&self) -> String {
        match self {
            Self::Bearer(token) => format!("Bearer {}", token.expose_secret()),
            Self::Session(key) => format!("Splunk {}", key.expose_secret()),
        }
    }

    /// The session key, if this credential came from a login call.
    pub fn session_key(&self) -> Option<&str> {
        match self {
            Self::Session(key) => Some(key.expose_secret()),
            Self::Bearer(_) => None,
        }
    }
}
