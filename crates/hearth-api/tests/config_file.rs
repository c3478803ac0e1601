use std::fs;
use std::time::Duration;

use hearth_api::{ConfigError, HearthConfig};
use tempfile::tempdir;

#[test]
fn loads_sections_from_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hearth.toml");
    fs::write(
        &path,
        r#"
        [api]
        base_url = "https://crm.example.com/api"

        [contact_limit]
        max_requests = 5
        window_ms = 30000

        [scroll]
        limit = 20
        root_margin = 250.0
        "#,
    )
    .unwrap();

    let config = HearthConfig::load(Some(&path)).unwrap();
    assert_eq!(config.api.base_url, "https://crm.example.com/api");
    assert_eq!(config.api.timeout_duration(), Duration::from_secs(15));
    assert_eq!(config.contact_limit.max_requests, 5);
    assert_eq!(config.contact_limit.window_duration(), Duration::from_secs(30));
    assert_eq!(config.scroll.limit, 20);
    assert_eq!(config.scroll.root_margin, 250.0);
    assert_eq!(config.scroll.threshold, 0.1);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = HearthConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Missing(ref missing) if *missing == path));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_toml_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hearth.toml");
    fs::write(&path, "[api\nbase_url = ").unwrap();

    assert!(matches!(HearthConfig::load(Some(&path)), Err(ConfigError::Figment(_))));
}
