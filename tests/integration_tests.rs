//! Integration tests for the fetch → export → clear pipeline
//!
//! These tests run the public `Localize` API against a mocked Localize
//! server and a temporary export directory.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use localize_sync::{
    config::Config,
    export::OutputFormat,
    project::{Key, Language, Project, Value},
    Localize, LocalizeError,
};

// ==================== Test Helpers ====================

fn create_test_config(host: &str, temp_dir: &TempDir, format: OutputFormat) -> Config {
    Config {
        host: host.to_string(),
        project_id: "7".to_string(),
        secret_key: "integration-secret".to_string(),
        directory: temp_dir.path().join("lang"),
        filename: "translations".to_string(),
        format,
    }
}

fn greeting_project_json() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "keys": [
                {
                    "name": "greeting",
                    "values": [
                        {"language": {"name": "en"}, "form": {"range_min": 0, "range_max": 1}, "text": "Hi"},
                        {"language": {"name": "fr"}, "form": {"range_min": 0, "range_max": 1}, "text": "Salut"}
                    ]
                }
            ],
            "languages": [{"name": "en"}, {"name": "fr"}]
        }
    })
}

fn three_language_project() -> Project {
    Project {
        keys: vec![
            Key {
                name: "apples".to_string(),
                values: vec![
                    Value::new("en", 0, 1, "One apple"),
                    Value::new("en", 2, "*", "Many apples"),
                    Value::new("fr", 0, 1, "Une pomme"),
                ],
            },
            Key {
                name: "bye".to_string(),
                values: vec![Value::new("de", 0, 0, "Tschüss")],
            },
        ],
        languages: vec![Language::new("en"), Language::new("fr"), Language::new("de")],
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("read exported file");
    serde_json::from_str(&content).expect("exported file should be JSON")
}

fn subdirectories(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .expect("read export root")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

async fn mount_project(mock_server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/client/projects/7"))
        .and(header("X-Localize-Secret-Key", "integration-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

// ==================== End-to-End Tests ====================

#[tokio::test]
async fn test_fetch_and_export_greeting_scenario() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mock_server = MockServer::start().await;
    mount_project(&mock_server, greeting_project_json()).await;

    let localize = Localize::new(create_test_config(
        &mock_server.uri(),
        &temp_dir,
        OutputFormat::Json,
    ))
    .await
    .expect("fetch should succeed");

    let report = localize.export().expect("export should succeed");

    let lang_dir = temp_dir.path().join("lang");
    assert_eq!(report.files.len(), 2);
    assert_eq!(
        read_json(&lang_dir.join("en").join("translations.json")),
        serde_json::json!({"greeting": "[0,1]Hi"})
    );
    assert_eq!(
        read_json(&lang_dir.join("fr").join("translations.json")),
        serde_json::json!({"greeting": "[0,1]Salut"})
    );
}

#[tokio::test]
async fn test_fetch_and_export_php() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mock_server = MockServer::start().await;
    mount_project(&mock_server, greeting_project_json()).await;

    let mut localize = Localize::new(create_test_config(
        &mock_server.uri(),
        &temp_dir,
        OutputFormat::Php,
    ))
    .await
    .expect("fetch should succeed");

    localize.only(["fr"]).export().expect("export should succeed");

    let content = fs::read_to_string(temp_dir.path().join("lang/fr/translations.php"))
        .expect("read php file");
    assert_eq!(
        content,
        "<?php\n\nreturn [\n    'greeting' => '[0,1]Salut',\n];\n"
    );
    assert!(!temp_dir.path().join("lang/en").exists());
}

#[tokio::test]
async fn test_fetch_failure_is_fatal() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/projects/7"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = Localize::new(create_test_config(
        &mock_server.uri(),
        &temp_dir,
        OutputFormat::Json,
    ))
    .await;

    assert!(matches!(
        result,
        Err(LocalizeError::Status { status: 403, .. })
    ));
    assert!(!temp_dir.path().join("lang").exists());
}

#[tokio::test]
async fn test_empty_project_payload_is_rejected() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let lang_dir = temp_dir.path().join("lang");
    for language in ["en", "fr"] {
        fs::create_dir_all(lang_dir.join(language)).unwrap();
    }
    let mock_server = MockServer::start().await;
    mount_project(&mock_server, serde_json::json!({"data": {}})).await;

    let result = Localize::new(create_test_config(
        &mock_server.uri(),
        &temp_dir,
        OutputFormat::Json,
    ))
    .await;

    assert!(matches!(result, Err(LocalizeError::MalformedResponse(_))));
    assert_eq!(subdirectories(&lang_dir), vec!["en", "fr"]);
}

// ==================== Selection + Filesystem Tests ====================

#[test]
fn test_export_then_clear_leaves_exactly_expected_languages() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let lang_dir = temp_dir.path().join("lang");
    for stale in ["ja", "ko"] {
        fs::create_dir_all(lang_dir.join(stale)).unwrap();
    }

    let mut localize = Localize::from_project(
        create_test_config("http://unused", &temp_dir, OutputFormat::Json),
        three_language_project(),
    );
    localize.only(["en", "de", "ja"]);

    localize.export().expect("export should succeed");
    localize.clear().expect("clear should succeed");

    assert_eq!(subdirectories(&lang_dir), vec!["de", "en"]);
}

#[test]
fn test_except_then_clear_removes_only_excluded() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let lang_dir = temp_dir.path().join("lang");
    for language in ["en", "fr", "de"] {
        fs::create_dir_all(lang_dir.join(language)).unwrap();
        fs::write(lang_dir.join(language).join("custom.txt"), language).unwrap();
    }

    let mut localize = Localize::from_project(
        create_test_config("http://unused", &temp_dir, OutputFormat::Json),
        three_language_project(),
    );

    let report = localize.except(["de"]).clear().expect("clear should succeed");

    assert_eq!(report.removed, vec![lang_dir.join("de")]);
    assert_eq!(subdirectories(&lang_dir), vec!["en", "fr"]);
    assert_eq!(
        fs::read_to_string(lang_dir.join("fr").join("custom.txt")).unwrap(),
        "fr"
    );
}

#[test]
fn test_only_disjoint_exports_all_languages() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut localize = Localize::from_project(
        create_test_config("http://unused", &temp_dir, OutputFormat::Json),
        three_language_project(),
    );

    let report = localize.only(["ja"]).export().expect("export should succeed");

    assert_eq!(report.files.len(), 3);
    assert_eq!(
        subdirectories(&temp_dir.path().join("lang")),
        vec!["de", "en", "fr"]
    );
}

#[test]
fn test_export_formats_plural_ranges_per_language() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let localize = Localize::from_project(
        create_test_config("http://unused", &temp_dir, OutputFormat::Json),
        three_language_project(),
    );

    localize.export().expect("export should succeed");

    let lang_dir = temp_dir.path().join("lang");
    assert_eq!(
        read_json(&lang_dir.join("en").join("translations.json")),
        serde_json::json!({"apples": "[0,1]One apple|[2,*]Many apples", "bye": ""})
    );
    assert_eq!(
        read_json(&lang_dir.join("de").join("translations.json")),
        serde_json::json!({"apples": "", "bye": "[0,0]Tschüss"})
    );
}

#[test]
fn test_export_is_repeatable() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let localize = Localize::from_project(
        create_test_config("http://unused", &temp_dir, OutputFormat::Json),
        three_language_project(),
    );

    let first = localize.export().expect("first export");
    let content = fs::read_to_string(&first.files[0]).unwrap();
    let second = localize.export().expect("second export");

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second.files[0]).unwrap(), content);
}
