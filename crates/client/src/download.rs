//! Artifact naming and persistence for downloaded app packages.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use dcd_config::Extension;

use crate::endpoints::URI_DOWNLOADAPP;
use crate::error::{ClientError, Result};

/// Derive the on-disk file name for a downloaded package.
///
/// Prefers the `Content-Disposition` header's `filename=` value; falls back
/// to the last path segment of the download endpoint. The caller's extension
/// always replaces whatever suffix was derived: the base name is kept, the
/// suffix is forced.
pub fn derive_file_name(content_disposition: Option<&str>, extension: Extension) -> String {
    let raw = content_disposition
        .and_then(|value| value.split_once("filename=").map(|(_, name)| name))
        .map(|name| name.trim().trim_matches('"').to_string())
        .unwrap_or_else(|| {
            URI_DOWNLOADAPP
                .rsplit('/')
                .next()
                .unwrap_or("downloadapp")
                .to_string()
        });

    // Strip the last extension only; a leading dot is not an extension.
    let base = match raw.rfind('.') {
        Some(idx) if idx > 0 => raw[..idx].to_string(),
        _ => raw,
    };

    format!("{}.{}", base, extension)
}

/// Write the artifact into `dir` under `name`.
///
/// The bytes go through a temp file in the same directory and are renamed
/// into place, so a failed download never leaves a partial file behind. An
/// existing file of the same name is overwritten silently.
pub(crate) fn write_artifact(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let target = dir.join(name);

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(&target)
        .map_err(|e| ClientError::Io(e.error))?;

    debug!(path = %target.display(), "Wrote app package");
    Ok(target)
}
