use super::*;
use serial_test::serial;
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert_eq!(config.user_agent, "nbstore");
    assert!(config.timeout.is_some());
}

#[test]
fn test_store_config_default() {
    let config = StoreConfig::default();
    assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
    assert_eq!(config.locale, Locale::ZhCn);
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::from_file(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, StoreConfig::default());
}

#[test]
fn test_file_values_are_applied() {
    let file = write_config(
        r#"
registry_url = "http://localhost:8080"
locale = "en"
timeout_secs = 5
"#,
    );
    let config = StoreConfig::from_file(file.path()).unwrap();
    assert_eq!(config.registry_url, "http://localhost:8080");
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.http().timeout, Some(Duration::from_secs(5)));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config("locale = \"en\"\n");
    let config = StoreConfig::from_file(file.path()).unwrap();
    assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
    assert_eq!(config.locale, Locale::En);
}

#[test]
fn test_malformed_file_is_config_error() {
    let file = write_config("registry_url = [");
    let err = StoreConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, StoreError::Config(_)));
}

#[test]
fn test_unknown_locale_in_file_is_rejected() {
    let file = write_config("locale = \"fr\"\n");
    assert!(StoreConfig::from_file(file.path()).is_err());
}

// =========================================================================
// 環境変数
// =========================================================================

#[test]
#[serial]
fn test_env_overrides_file() {
    std::env::set_var(ENV_REGISTRY_URL, "http://env.example");
    std::env::set_var(ENV_LOCALE, "en");

    let mut config = StoreConfig::default();
    config.apply_env().unwrap();

    std::env::remove_var(ENV_REGISTRY_URL);
    std::env::remove_var(ENV_LOCALE);

    assert_eq!(config.registry_url, "http://env.example");
    assert_eq!(config.locale, Locale::En);
}

#[test]
#[serial]
fn test_empty_env_is_ignored() {
    std::env::set_var(ENV_REGISTRY_URL, "");
    let mut config = StoreConfig::default();
    config.apply_env().unwrap();
    std::env::remove_var(ENV_REGISTRY_URL);

    assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
}

#[test]
fn test_cli_overrides_win() {
    let mut config = StoreConfig {
        registry_url: "http://file.example".to_string(),
        locale: Locale::ZhCn,
        timeout_secs: 30,
    };
    config.apply_overrides(&ConfigOverrides {
        registry_url: Some("http://cli.example".to_string()),
        locale: Some(Locale::En),
    });
    assert_eq!(config.registry_url, "http://cli.example");
    assert_eq!(config.locale, Locale::En);
}

#[test]
fn test_empty_overrides_change_nothing() {
    let mut config = StoreConfig::default();
    config.apply_overrides(&ConfigOverrides::default());
    assert_eq!(config, StoreConfig::default());
}
