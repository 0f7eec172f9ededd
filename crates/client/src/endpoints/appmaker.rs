//! Distributed configuration management (appmaker) endpoints.
//!
//! These back the "Distributed configuration management" feature found under
//! General settings in Splunk Web: `makeapp` generates a configuration app
//! package server-side, `downloadapp` retrieves the archive.

use reqwest::Client;
use tracing::debug;

use dcd_config::Routine;

use crate::auth::Credential;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{AppDescriptor, MakeAppParams};

pub(crate) const URI_MAKEAPP: &str = "/services/data/appmaker/makeapp";
pub(crate) const URI_DOWNLOADAPP: &str = "/services/data/appmaker/downloadapp";

/// The fully qualified server-side identifier for a routine.
pub fn routine_identifier(routine: Routine) -> &'static str {
    match routine {
        Routine::IndexTimeProperties => "make_index_time_properties:makeIndexTimeProperties",
        Routine::OnPrem => "make_on_prem:makeOnPrem",
    }
}

/// Render the spec payload for the index_time_properties routine.
///
/// The server expects this exact shape, including the space after the comma.
pub fn index_time_spec(include_indexes: bool, include_properties: bool) -> String {
    format!(
        "{{\"include_indexes\":{}, \"include_properties\":{}}}",
        include_indexes, include_properties
    )
}

/// Build the form body for a makeapp call. Only the index_time_properties
/// routine carries a spec.
fn make_app_form(params: &MakeAppParams) -> Vec<(&'static str, String)> {
    let mut form = vec![("routine", routine_identifier(params.routine).to_string())];
    if params.routine == Routine::IndexTimeProperties {
        form.push((
            "spec",
            index_time_spec(params.include_indexes, params.include_properties),
        ));
    }
    form
}

/// Request generation of an app package.
pub async fn make_app(
    client: &Client,
    base_url: &str,
    credential: &Credential,
    params: &MakeAppParams,
) -> Result<AppDescriptor> {
    debug!(routine = %params.routine, "Requesting app package generation");

    let url = format!("{}{}", base_url, URI_MAKEAPP);
    let builder = client
        .post(&url)
        .header("Authorization", credential.header_value())
        .form(&make_app_form(params));
    let response = send_request(builder).await?;

    response.json::<AppDescriptor>().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse makeapp response: {}", e))
    })
}

/// Fetch a generated app package.
///
/// Returns the `Content-Disposition` header (if any) together with the raw
/// body bytes; naming and persistence are the caller's concern.
pub async fn fetch_app(
    client: &Client,
    base_url: &str,
    credential: &Credential,
    app: &AppDescriptor,
) -> Result<(Option<String>, Vec<u8>)> {
    debug!(
        namespace = %app.namespace,
        filename = %app.filename,
        "Downloading app package"
    );

    let url = format!("{}{}", base_url, URI_DOWNLOADAPP);
    let builder = client
        .get(&url)
        .header("Authorization", credential.header_value())
        .query(&[
            ("namespace", app.namespace.as_str()),
            ("filename", app.filename.as_str()),
        ]);
    let response = send_request(builder).await?;

    let content_disposition = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let body = response.bytes().await?;

    Ok((content_disposition, body.to_vec()))
}
