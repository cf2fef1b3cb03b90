//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use cadastro::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("CADASTRO_APPLICATION_LOG_LEVEL");
    std::env::remove_var("CADASTRO_API_BASE_URL");
    std::env::remove_var("CADASTRO_API_TIMEOUT_SECONDS");
    std::env::remove_var("CADASTRO_API_TLS_VERIFY");
    std::env::remove_var("CADASTRO_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("CADASTRO_LOGGING_LOCAL_PATH");
    std::env::remove_var("TEST_REGISTRY_URL");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "debug"

[api]
base_url = "https://registry.example.com/api/pessoas"
timeout_seconds = 60
tls_verify = false

[logging]
local_enabled = true
local_path = "/tmp/cadastro"
local_rotation = "hourly"
local_max_size_mb = 50
"#;
    let file = write_config(toml_content);

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(
        config.api.base_url,
        "https://registry.example.com/api/pessoas"
    );
    assert_eq!(config.api.timeout_seconds, 60);
    assert!(!config.api.tls_verify);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[api]
base_url = "http://localhost:8000/api/pessoas"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.api.timeout_seconds, 30);
    assert!(config.api.tls_verify);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "info"

[api]
base_url = "http://localhost:8000/api/pessoas"
"#,
    );

    std::env::set_var("CADASTRO_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var(
        "CADASTRO_API_BASE_URL",
        "http://staging.example.com/api/pessoas",
    );
    std::env::set_var("CADASTRO_API_TIMEOUT_SECONDS", "90");

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(
        config.api.base_url,
        "http://staging.example.com/api/pessoas"
    );
    assert_eq!(config.api.timeout_seconds, 90);

    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("TEST_REGISTRY_URL", "http://subst.example.com/api/pessoas");

    let file = write_config(
        r#"
[api]
base_url = "${TEST_REGISTRY_URL}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api.base_url, "http://subst.example.com/api/pessoas");

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[api]
base_url = "${CADASTRO_TEST_NEVER_SET_VAR}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err
        .to_string()
        .contains("Missing required environment variables"));
}

#[test]
fn test_invalid_base_url_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[api]
base_url = "not a url"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid api.base_url"));
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "loud"

[api]
base_url = "http://localhost:8000/api/pessoas"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid log_level"));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = load_config("definitely-not-here.toml");
    assert!(result.is_err());
}
