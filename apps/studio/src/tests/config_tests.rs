use std::collections::HashMap;

use super::*;

#[test]
fn normalizes_plain_file_path_to_sqlite_url() {
    assert_eq!(
        normalize_database_url("./data/test.db"),
        "sqlite://./data/test.db"
    );
    assert_eq!(normalize_database_url("  "), Settings::default().database_url);
    assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
}

#[test]
fn sqlite_prefixed_path_gains_double_slash() {
    assert_eq!(
        normalize_database_url("sqlite:data\\studio.db"),
        "sqlite://data/studio.db"
    );
    assert_eq!(
        normalize_database_url("sqlite://./data/studio.db?mode=rwc"),
        "sqlite://./data/studio.db?mode=rwc"
    );
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        r#"
        base_url = "https://clearmetricslab.com"
        contact_endpoint = "https://hooks.example.com/contact"
        reset_after_ms = 1500
        "#,
    );

    assert_eq!(settings.base_url.as_deref(), Some("https://clearmetricslab.com"));
    assert_eq!(settings.contact_endpoint, "https://hooks.example.com/contact");
    assert_eq!(settings.reset_after_ms, 1500);
    assert_eq!(settings.database_url, Settings::default().database_url);
}

#[test]
fn malformed_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "reset_after_ms = \"soon\"");
    assert_eq!(settings, Settings::default());
}

#[test]
fn environment_wins_over_file_and_app_prefix_wins_last() {
    let env: HashMap<&str, &str> = [
        ("STUDIO_DATABASE_URL", "sqlite://./a.db"),
        ("APP__DATABASE_URL", "sqlite://./b.db"),
        ("STUDIO_CONTACT_ENDPOINT", "/hooks/contact"),
        ("APP__REQUEST_TIMEOUT_SECS", "3"),
        ("APP__RESET_AFTER_MS", "not-a-number"),
    ]
    .into_iter()
    .collect();

    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "contact_endpoint = \"/file/contact\"");
    apply_env_overrides(&mut settings, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(settings.database_url, "sqlite://./b.db");
    assert_eq!(settings.contact_endpoint, "/hooks/contact");
    assert_eq!(settings.request_timeout(), Duration::from_secs(3));
    assert_eq!(settings.reset_after_ms, 3_000);
}

#[test]
fn submission_config_carries_endpoint_and_delay() {
    let settings = Settings {
        contact_endpoint: "/api/contact".into(),
        reset_after_ms: 250,
        ..Settings::default()
    };
    let config = settings.submission_config(FormSchema::basic());
    assert_eq!(config.endpoint, "/api/contact");
    assert_eq!(config.reset_after, Duration::from_millis(250));
    assert!(!config.schema.include_classification);
}

#[test]
fn blank_base_url_means_absolute_endpoints_only() {
    let settings = Settings {
        base_url: Some(" ".into()),
        ..Settings::default()
    };
    assert_eq!(settings.base_url().expect("parse"), None);

    let settings = Settings {
        base_url: Some("not a url".into()),
        ..Settings::default()
    };
    assert!(settings.base_url().is_err());
}
