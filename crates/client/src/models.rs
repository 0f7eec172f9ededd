//! Data models for the appmaker API.

use serde::Deserialize;

use dcd_config::Routine;

/// Identity of a generated app package, as returned by the makeapp call.
///
/// Consumed immediately by the downloader; it has no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppDescriptor {
    pub namespace: String,
    pub filename: String,
}

/// Parameters for a makeapp call.
#[derive(Debug, Clone)]
pub struct MakeAppParams {
    pub routine: Routine,
    /// Include indexes.conf content (index_time_properties only).
    pub include_indexes: bool,
    /// Include props/transforms content (index_time_properties only).
    pub include_properties: bool,
}

/// A single message from Splunk (usually in error responses).
#[derive(Debug, Clone, Deserialize)]
pub struct SplunkMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: String,
}

/// A collection of messages from Splunk.
#[derive(Debug, Clone, Deserialize)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}
