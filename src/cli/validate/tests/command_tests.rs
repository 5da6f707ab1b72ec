//! Execution tests for [`ValidateCommand`].

use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use crate::cli::CliConfig;
use crate::cli::validate::{OutputFormat, ValidateCommand};
use crate::core::{ValidatorError, is_already_reported};
use crate::test_utils::{MarketplaceFixture, init_test_logging, minimal_plugin};

fn command(file: PathBuf, format: OutputFormat) -> ValidateCommand {
    ValidateCommand {
        file,
        format,
        offline: true,
    }
}

fn quiet_config() -> CliConfig {
    CliConfig {
        log_level: None,
        ..CliConfig::default()
    }
}

#[tokio::test]
async fn test_execute_valid_document() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let path = MarketplaceFixture::valid().write_to(temp.path()).unwrap();

    let result = command(path, OutputFormat::Text).execute_with_config(&quiet_config()).await;
    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn test_execute_invalid_document_reports_count() {
    let temp = TempDir::new().unwrap();
    let path = MarketplaceFixture::many_errors().write_to(temp.path()).unwrap();

    let err = command(path, OutputFormat::Text).execute_with_config(&quiet_config()).await.unwrap_err();

    assert!(is_already_reported(&err));
    match err.downcast_ref::<ValidatorError>() {
        Some(ValidatorError::ValidationFailed {
            error_count, ..
        }) => assert_eq!(*error_count, 7),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_missing_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.json");

    let err = command(path, OutputFormat::Text).execute_with_config(&quiet_config()).await.unwrap_err();

    assert!(!is_already_reported(&err));
    assert!(matches!(err.downcast_ref::<ValidatorError>(), Some(ValidatorError::FileNotFound { .. })));
}

#[tokio::test]
async fn test_execute_directory_is_fatal() {
    let temp = TempDir::new().unwrap();

    let err = command(temp.path().to_path_buf(), OutputFormat::Text)
        .execute_with_config(&quiet_config())
        .await
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<ValidatorError>(), Some(ValidatorError::NotAFile { .. })));
}

#[tokio::test]
async fn test_execute_invalid_json_is_fatal() {
    let temp = TempDir::new().unwrap();
    let path = MarketplaceFixture::invalid_json().write_to(temp.path()).unwrap();

    let err = command(path, OutputFormat::Text).execute_with_config(&quiet_config()).await.unwrap_err();

    assert!(matches!(err.downcast_ref::<ValidatorError>(), Some(ValidatorError::InvalidJson { .. })));
}

#[tokio::test]
async fn test_execute_json_format_load_failure_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.json");

    let err = command(path, OutputFormat::Json).execute_with_config(&quiet_config()).await.unwrap_err();

    // The JSON report has already been printed, so main must stay silent
    assert!(is_already_reported(&err));
}

#[tokio::test]
async fn test_execute_with_unreachable_schema_falls_back() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let temp = TempDir::new().unwrap();
    let fixture = MarketplaceFixture::with_plugins(vec![minimal_plugin("a")]);
    let path = fixture.write_to(temp.path()).unwrap();

    let config = CliConfig {
        log_level: None,
        schema_url: format!("http://{addr}/marketplace.schema.json"),
        schema_timeout: Duration::from_secs(2),
    };
    let cmd = ValidateCommand {
        file: path,
        format: OutputFormat::Text,
        offline: false,
    };

    assert!(cmd.execute_with_config(&config).await.is_ok());
}

#[tokio::test]
async fn test_execute_non_object_root_fails_validation() {
    let temp = TempDir::new().unwrap();
    let fixture = MarketplaceFixture::from_value("array_root", &json!([{ "name": "m" }]));
    let path = fixture.write_to(temp.path()).unwrap();

    let err = command(path, OutputFormat::Json).execute_with_config(&quiet_config()).await.unwrap_err();

    match err.downcast_ref::<ValidatorError>() {
        Some(ValidatorError::ValidationFailed {
            error_count, ..
        }) => assert_eq!(*error_count, 1),
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Serve one canned schema document on a local port and return its URL.
async fn serve_schema(body: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/marketplace.schema.json")
}

#[tokio::test]
async fn test_run_with_loaded_schema_matches_offline_rules() {
    init_test_logging(None);
    let url = serve_schema(r#"{"type":"object","required":["name","owner","plugins"]}"#).await;

    let temp = TempDir::new().unwrap();
    let path = MarketplaceFixture::many_errors().write_to(temp.path()).unwrap();

    let offline = command(path.clone(), OutputFormat::Json).run(&quiet_config()).await.unwrap();

    let config = CliConfig {
        log_level: None,
        schema_url: url,
        schema_timeout: Duration::from_secs(5),
    };
    let online = ValidateCommand {
        file: path,
        format: OutputFormat::Json,
        offline: false,
    }
    .run(&config)
    .await
    .unwrap();

    assert_eq!(online.errors, offline.errors);
    assert_eq!(online.errors.len(), 7);
    assert!(!online.valid);
    assert!(!offline.schema_loaded);

    let report = serde_json::to_value(&online).unwrap();
    assert_eq!(report["schema_loaded"], json!(true));
    assert_eq!(report["valid"], json!(false));
}
