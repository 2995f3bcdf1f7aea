use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use contact_client::{SubmissionConfig, DEFAULT_CONTACT_ENDPOINT, DEFAULT_RESET_AFTER};
use serde::Deserialize;
use shared::domain::FormSchema;
use tracing::warn;
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "studio.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub base_url: Option<String>,
    pub contact_endpoint: String,
    pub request_timeout_secs: u64,
    pub reset_after_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://./data/studio.db".into(),
            base_url: Some("http://127.0.0.1:4321".into()),
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.into(),
            request_timeout_secs: 15,
            reset_after_ms: DEFAULT_RESET_AFTER.as_millis() as u64,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    database_url: Option<String>,
    base_url: Option<String>,
    contact_endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
    reset_after_ms: Option<u64>,
}

impl Settings {
    pub fn base_url(&self) -> Result<Option<Url>> {
        self.base_url
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| Url::parse(raw).with_context(|| format!("invalid base url '{raw}'")))
            .transpose()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn submission_config(&self, schema: FormSchema) -> SubmissionConfig {
        SubmissionConfig {
            endpoint: self.contact_endpoint.clone(),
            reset_after: Duration::from_millis(self.reset_after_ms),
            schema,
        }
    }
}

/// Defaults, then the settings file, then the process environment.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    settings
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(error) => {
            warn!(%error, "ignoring unreadable settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.database_url {
        settings.database_url = v;
    }
    if let Some(v) = file_cfg.base_url {
        settings.base_url = Some(v);
    }
    if let Some(v) = file_cfg.contact_endpoint {
        settings.contact_endpoint = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = file_cfg.reset_after_ms {
        settings.reset_after_ms = v;
    }
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("STUDIO_DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = lookup("APP__DATABASE_URL") {
        settings.database_url = v;
    }

    if let Some(v) = lookup("STUDIO_BASE_URL") {
        settings.base_url = Some(v);
    }
    if let Some(v) = lookup("APP__BASE_URL") {
        settings.base_url = Some(v);
    }

    if let Some(v) = lookup("STUDIO_CONTACT_ENDPOINT") {
        settings.contact_endpoint = v;
    }
    if let Some(v) = lookup("APP__CONTACT_ENDPOINT") {
        settings.contact_endpoint = v;
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }
    if let Some(v) = lookup("APP__RESET_AFTER_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.reset_after_ms = parsed;
        }
    }
}

/// Turns a bare path or `sqlite:` path into a `sqlite://` url. The parent
/// directory is created by `Storage::new`.
pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return Settings::default().database_url;
    }

    if raw_database_url.starts_with("sqlite::memory:")
        || raw_database_url.starts_with("sqlite://")
        || raw_database_url.contains("://")
    {
        return raw_database_url.to_string();
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite:") {
        let path = path.replace('\\', "/");
        return format!("sqlite://{path}");
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
