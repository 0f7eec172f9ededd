//! The download pipeline: authenticate, request the app package, download it.
//!
//! Control flow is strictly sequential. Every stage is fatal on failure;
//! there is no partial-success state and no retry of any stage. The one
//! exception is the closing logout, which is best-effort.

use anyhow::{Context, Result};
use tracing::debug;

use dcd_client::{AuthStrategy, DcdClient, MakeAppParams};
use dcd_config::{AuthMode, Settings};

use crate::error::MakeAppError;
use crate::interactive;

pub async fn run(settings: Settings) -> Result<()> {
    println!("[+] Splunk URL: {}", settings.splunk.host);
    debug!(routine = %settings.app.routine, "Starting download pipeline");

    let client = DcdClient::builder().from_settings(&settings).build()?;

    let strategy = match settings.splunk.auth.clone() {
        AuthMode::Token { token } => AuthStrategy::Bearer { token },
        AuthMode::Session { username } => {
            let password = interactive::prompt_password()?;
            AuthStrategy::Session { username, password }
        }
    };

    let credential = client
        .authenticate(&strategy)
        .await
        .context("authentication failed")?;

    let params = MakeAppParams {
        routine: settings.app.routine,
        include_indexes: settings.app.indexes,
        include_properties: settings.app.properties,
    };
    let app = client
        .make_app(&credential, &params)
        .await
        .map_err(MakeAppError::from)?;
    println!("[+] App package ready: {} ({})", app.filename, app.namespace);

    let written = client
        .download_app(
            &credential,
            &app,
            &settings.app.output,
            settings.app.extension,
        )
        .await
        .context("download failed")?;
    println!(
        "[+] Downloaded file {} in {}",
        written
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| written.display().to_string()),
        settings.app.output.display()
    );

    client.logout(&credential).await;
    println!("[+] Done.");
    Ok(())
}
