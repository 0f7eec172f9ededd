//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes so scripts can distinguish "the server
//!   rejected the app-creation request" from "the server was unreachable".
//! - Map pipeline errors onto those codes.
//!
//! Invariants:
//! - Only the app-creation stage maps to exit codes 2 and 3; every other
//!   fatal error (configuration, authentication, download) maps to 1.

use dcd_client::ClientError;

/// Structured exit codes for splunk-dcd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the package was downloaded.
    Success = 0,

    /// General error - configuration, authentication, or download failure.
    GeneralError = 1,

    /// The app-creation request was rejected with an HTTP status error.
    ///
    /// Scripts should inspect the printed response body; retrying the same
    /// request is unlikely to help.
    AppRequestRejected = 2,

    /// The app-creation endpoint could not be reached.
    ///
    /// Scripts may retry once connectivity is restored.
    AppRequestUnreachable = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with `std::process::exit()`.
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Marker wrapping errors from the app-creation stage so the exit-code
/// mapper can tell them apart from the rest of the pipeline.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct MakeAppError(#[from] pub ClientError);

impl From<&MakeAppError> for ExitCode {
    fn from(err: &MakeAppError) -> Self {
        match &err.0 {
            ClientError::ApiError { .. } => ExitCode::AppRequestRejected,
            ClientError::HttpError(_) => ExitCode::AppRequestUnreachable,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(make_app_err) = cause.downcast_ref::<MakeAppError>() {
                return ExitCode::from(make_app_err);
            }
        }
        ExitCode::GeneralError
    }
}
