//! Config file layer tests.

use std::io::Write;

use crate::loader::builder::SettingsLoader;
use crate::loader::error::ConfigError;
use crate::types::{AuthMode, Extension, Routine};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_provides_all_sections() {
    let file = write_config(
        r#"{
            "splunk": {
                "host": "https://file.example.com:8089",
                "username": "admin",
                "timeout": 90
            },
            "app": {
                "routine": "index_time_properties",
                "indexes": "yes",
                "properties": false,
                "output": "/var/bundles",
                "extension": "spl"
            },
            "ssl": { "verify": true }
        }"#,
    );

    let settings = SettingsLoader::new()
        .with_config_path(file.path().to_path_buf())
        .from_file()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.splunk.host, "https://file.example.com:8089");
    assert!(matches!(
        settings.splunk.auth,
        AuthMode::Session { ref username } if username == "admin"
    ));
    assert_eq!(settings.splunk.timeout, std::time::Duration::from_secs(90));
    assert_eq!(settings.app.routine, Routine::IndexTimeProperties);
    assert!(settings.app.indexes);
    assert!(!settings.app.properties);
    assert_eq!(settings.app.output, std::path::PathBuf::from("/var/bundles"));
    assert_eq!(settings.app.extension, Extension::Spl);
    assert!(settings.ssl.verify);
}

#[test]
fn test_file_boolean_strings_use_truth_table() {
    let file = write_config(
        r#"{
            "splunk": { "host": "https://file.example.com:8089", "token": "file-token" },
            "app": { "routine": "on_prem", "indexes": "t" },
            "ssl": { "verify": "nope" }
        }"#,
    );

    let settings = SettingsLoader::new()
        .with_config_path(file.path().to_path_buf())
        .from_file()
        .unwrap()
        .build()
        .unwrap();

    assert!(settings.app.indexes);
    assert!(!settings.ssl.verify);
}

#[test]
fn test_missing_sections_are_fine() {
    let file = write_config(r#"{ "splunk": { "token": "file-token" } }"#);

    let loader = SettingsLoader::new()
        .with_config_path(file.path().to_path_buf())
        .from_file()
        .unwrap();

    // token came from the file; host/routine still missing
    let result = loader.build();
    assert!(matches!(result, Err(ConfigError::MissingHost)));
}

#[test]
fn test_unreadable_file_is_an_error() {
    let result = SettingsLoader::new()
        .with_config_path(std::path::PathBuf::from("/nonexistent/dcd.json"))
        .from_file();
    assert!(matches!(result, Err(ConfigError::ConfigFileRead { .. })));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("{ not json");
    let result = SettingsLoader::new()
        .with_config_path(file.path().to_path_buf())
        .from_file();
    assert!(matches!(result, Err(ConfigError::ConfigFileParse { .. })));
}

#[test]
fn test_invalid_routine_in_file_is_an_error() {
    let file = write_config(r#"{ "app": { "routine": "everything" } }"#);
    let result = SettingsLoader::new()
        .with_config_path(file.path().to_path_buf())
        .from_file();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_no_config_path_is_a_noop() {
    let result = SettingsLoader::new().from_file();
    assert!(result.is_ok());
}
