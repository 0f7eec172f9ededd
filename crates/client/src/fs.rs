//! Filesystem helpers.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ClientError, Result};

/// Ensure a directory exists, creating it (and any missing parents) if
/// necessary.
///
/// Returns the absolute path. Fails when the path exists but is not a
/// directory, and distinguishes permission failures from other OS errors.
/// Idempotent: calling it again on an existing directory is a no-op.
pub fn ensure_directory(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => ClientError::PermissionDenied(format!(
                "cannot create directory: {}",
                path.display()
            )),
            _ => ClientError::Io(e),
        })?;
        debug!(path = %path.display(), "Created directory");
    }

    if !path.is_dir() {
        return Err(ClientError::NotADirectory(path.display().to_string()));
    }

    Ok(path.canonicalize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_nested_directories() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b").join("c");
        let resolved = ensure_directory(&nested).unwrap();
        assert!(resolved.is_dir());
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("out");
        let first = ensure_directory(&dir).unwrap();
        let second = ensure_directory(&dir).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_existing_file_is_not_a_directory() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();
        let err = ensure_directory(&file).unwrap_err();
        assert!(matches!(err, ClientError::NotADirectory(_)));
    }
}
