//! Integration tests for settings loading.
//!
//! These tests inject the environment as a map and write env files to
//! temporary directories, so they never read or modify the real process
//! environment.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use hero_settings::{ConfigError, FieldIssue, Origin, SettingsLoader};

// =============================================================================
// Helpers
// =============================================================================

fn env(items: &[(&str, &str)]) -> HashMap<String, String> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Write `contents` to an env file inside a fresh temp dir
fn env_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(".env");
    fs::write(&path, contents).expect("write env file");
    (dir, path)
}

const FULL_FILE: &str = "\
# Local development settings
DATABASE_URL=postgres://file@localhost/heroes
ENCRYPTION_KEY=file-encryption-key
JWT_SECRET=\"file jwt secret\"
GOOGLE_API_KEY='file-google-key'
";

// =============================================================================
// Env File Layer
// =============================================================================

#[test]
fn test_loads_required_values_from_env_file() {
    let (_dir, path) = env_file(FULL_FILE);

    let report = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .load_report()
        .unwrap();
    let settings = report.settings();

    assert_eq!(settings.database_url(), "postgres://file@localhost/heroes");
    assert_eq!(settings.encryption_key(), "file-encryption-key");
    assert_eq!(settings.jwt_secret(), "file jwt secret");
    assert_eq!(settings.google_api_key(), "file-google-key");
    assert_eq!(report.origin_of("DATABASE_URL"), Some(Origin::EnvFile));
    assert_eq!(report.origin_of("JWT_ALGORITHM"), Some(Origin::Default));
    assert_eq!(report.env_file(), Some(path.as_path()));
}

#[test]
fn test_environment_overrides_env_file() {
    let (_dir, path) = env_file(FULL_FILE);
    let source = env(&[("DATABASE_URL", "postgres://env@db.internal/heroes")]);

    let report = SettingsLoader::with_source(source)
        .env_file(&path)
        .load_report()
        .unwrap();

    assert_eq!(
        report.settings().database_url(),
        "postgres://env@db.internal/heroes"
    );
    assert_eq!(report.origin_of("DATABASE_URL"), Some(Origin::Environment));
    assert_eq!(report.settings().encryption_key(), "file-encryption-key");
}

#[test]
fn test_env_file_overrides_defaults() {
    let contents =
        format!("{FULL_FILE}PROJECT_NAME=\"Villain API\"\nJWT_EXPIRATION=45\nDEBUG=on\n");
    let (_dir, path) = env_file(&contents);

    let settings = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .load()
        .unwrap();

    assert_eq!(settings.project_name(), "Villain API");
    assert_eq!(settings.jwt_expiration_minutes(), 45);
    assert!(settings.debug());
}

#[test]
fn test_missing_env_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let source = env(&[
        ("DATABASE_URL", "postgres://localhost/heroes"),
        ("ENCRYPTION_KEY", "enc"),
        ("JWT_SECRET", "secret"),
        ("GOOGLE_API_KEY", "google"),
    ]);

    let report = SettingsLoader::with_source(source)
        .env_file(dir.path().join("does-not-exist.env"))
        .load_report()
        .unwrap();

    assert!(report.env_file().is_none());
    assert_eq!(report.settings().project_name(), "Hero API");
}

#[test]
fn test_missing_everywhere_names_each_field() {
    let (_dir, path) = env_file("PROJECT_NAME='Hero API'\n");

    let err = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .load()
        .unwrap_err();

    assert_eq!(
        err.fields(),
        vec!["DATABASE_URL", "ENCRYPTION_KEY", "JWT_SECRET", "GOOGLE_API_KEY"]
    );
    let message = err.to_string();
    assert!(message.contains("GOOGLE_API_KEY is required but not set"));
}

#[test]
fn test_invalid_debug_in_env_file_fails() {
    let contents = format!("{FULL_FILE}DEBUG=notabool\n");
    let (_dir, path) = env_file(&contents);

    let err = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .load()
        .unwrap_err();

    assert_eq!(err.fields(), vec!["DEBUG"]);
    assert!(matches!(
        &err.field_errors()[0].issue,
        FieldIssue::Invalid { expected: "boolean", .. }
    ));
}

#[test]
fn test_malformed_env_file_fails() {
    let (_dir, path) = env_file("DATABASE_URL=\"unterminated\n");

    let err = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .load()
        .unwrap_err();

    match err {
        ConfigError::EnvFile { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected env file error, got {other:?}"),
    }
}

#[test]
fn test_non_utf8_env_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, b"PROJECT_NAME=\xff\xfe\n").unwrap();

    let err = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::EnvFile { .. }));
}

#[test]
fn test_utf8_values_preserved() {
    let contents = format!("{FULL_FILE}PROJECT_NAME=\"Héroes API ✓\"\n");
    let (_dir, path) = env_file(&contents);

    let settings = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .load()
        .unwrap();

    assert_eq!(settings.project_name(), "Héroes API ✓");
}

#[test]
fn test_env_file_is_not_exported() {
    let (_dir, path) = env_file("HERO_SETTINGS_EXPORT_CHECK=1\n");

    let _ = SettingsLoader::with_source(HashMap::new()).env_file(&path).load();

    assert!(std::env::var("HERO_SETTINGS_EXPORT_CHECK").is_err());
}

// =============================================================================
// Strict Mode & Case Handling
// =============================================================================

#[test]
fn test_unknown_file_keys_rejected_by_default() {
    let contents = format!("{FULL_FILE}REDIS_URL=redis://localhost\nAPP_PORT=8000\n");
    let (_dir, path) = env_file(&contents);
    let source = env(&[("PATH", "/usr/bin")]);

    let err = SettingsLoader::with_source(source)
        .env_file(&path)
        .load()
        .unwrap_err();

    assert_eq!(err.fields(), vec!["APP_PORT", "REDIS_URL"]);
    assert!(err
        .field_errors()
        .iter()
        .all(|e| e.issue == FieldIssue::Unexpected));
}

#[test]
fn test_unknown_file_keys_allowed_when_opted_out() {
    let contents = format!("{FULL_FILE}REDIS_URL=redis://localhost\n");
    let (_dir, path) = env_file(&contents);

    let settings = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .deny_unknown_file_keys(false)
        .load()
        .unwrap();

    assert_eq!(settings.database_url(), "postgres://file@localhost/heroes");
}

#[test]
fn test_case_insensitive_env_file_keys() {
    let (_dir, path) = env_file(&FULL_FILE.to_lowercase());

    let err = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .load()
        .unwrap_err();
    assert!(err.fields().contains(&"database_url"));
    assert!(err.fields().contains(&"DATABASE_URL"));

    let settings = SettingsLoader::with_source(HashMap::new())
        .env_file(&path)
        .case_sensitive(false)
        .load()
        .unwrap();
    assert_eq!(settings.database_url(), "postgres://file@localhost/heroes");
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_loading_twice_yields_equal_settings() {
    let (_dir, path) = env_file(FULL_FILE);
    let source = env(&[("JWT_EXPIRATION", "45"), ("DEBUG", "true")]);
    let loader = SettingsLoader::with_source(source).env_file(&path);

    let first = loader.load().unwrap();
    let second = loader.load().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.jwt_expiration_minutes(), 45);
    assert!(first.debug());
}
