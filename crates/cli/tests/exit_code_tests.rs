//! Integration tests for structured exit codes.
//!
//! These verify that splunk-dcd returns the correct exit codes for the
//! different failure scenarios, enabling reliable shell scripting:
//! 0 success, 2 app-creation rejected, 3 app-creation unreachable, 1 for
//! everything else.

mod common;

use common::{dcd_cmd, dcd_cmd_with_host};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test that a complete run returns exit code 0.
#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/data/appmaker/makeapp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "namespace": "search",
            "filename": "bundle.spl"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/appmaker/downloadapp"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Disposition", "attachment; filename=bundle.spl")
                .set_body_bytes(b"archive".to_vec()),
        )
        .mount(&server)
        .await;

    let output = tempfile::tempdir().unwrap();
    let mut cmd = dcd_cmd_with_host(&server.uri());
    cmd.args(["--output", output.path().to_str().unwrap()])
        .assert()
        .code(0);
}

/// Test that an app-creation HTTP status error returns exit code 2 and that
/// no download is attempted.
#[tokio::test]
async fn test_make_app_rejection_returns_exit_code_2_without_download() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/data/appmaker/makeapp"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "messages": [{ "type": "ERROR", "text": "appmaker failure" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/appmaker/downloadapp"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = tempfile::tempdir().unwrap();
    let mut cmd = dcd_cmd_with_host(&server.uri());
    cmd.args(["--output", output.path().to_str().unwrap()])
        .assert()
        .code(2);
}

/// Test that an unreachable app-creation endpoint returns exit code 3.
#[test]
fn test_make_app_unreachable_returns_exit_code_3() {
    // Nothing listens on port 1.
    let mut cmd = dcd_cmd_with_host("http://127.0.0.1:1");
    cmd.assert().code(3);
}

/// Test that missing configuration returns exit code 1 and fails before any
/// network access.
#[test]
fn test_missing_host_returns_exit_code_1() {
    let mut cmd = dcd_cmd();
    cmd.assert().code(1);
}

/// Test that a missing routine is a configuration error.
#[test]
fn test_missing_routine_returns_exit_code_1() {
    let mut cmd = dcd_cmd_with_host("https://localhost:8089");
    cmd.env_remove("APP_DCD_ROUTINE");
    cmd.assert().code(1);
}

/// Test that an unreadable config file aborts with exit code 1.
#[test]
fn test_unreadable_config_file_returns_exit_code_1() {
    let mut cmd = dcd_cmd_with_host("https://localhost:8089");
    cmd.args(["--config", "/nonexistent/dcd.json"]).assert().code(1);
}

/// Test that a malformed config file aborts with exit code 1.
#[test]
fn test_malformed_config_file_returns_exit_code_1() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("dcd.json");
    std::fs::write(&config, "{ not json").unwrap();

    let mut cmd = dcd_cmd_with_host("https://localhost:8089");
    cmd.args(["--config", config.to_str().unwrap()])
        .assert()
        .code(1);
}

/// Test that a failure on the session-auth path maps to the general error
/// code, not the app-creation codes, and never reaches makeapp.
///
/// Without a tty the password prompt fails fast; with one, the mocked 401
/// would fail authentication instead. Both are general errors.
#[tokio::test]
async fn test_session_auth_failure_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "messages": [{ "type": "ERROR", "text": "Login failed" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/data/appmaker/makeapp"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut cmd = dcd_cmd_with_host(&server.uri());
    cmd.env_remove("SPLUNK_DCD_TOKEN");
    cmd.args(["--username", "admin"]);
    cmd.write_stdin("testpassword\n");
    cmd.assert().code(1);
}
