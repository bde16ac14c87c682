use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::text::Locale;

pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard.json";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_NOTIFICATION_SECS: u64 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin; the `/api/...` paths are appended to it.
    pub api_base_url: String,
    pub locale: Locale,
    /// How long a notification stays on screen.
    pub notification_secs: u64,
    /// Unset means requests may take as long as the backend needs.
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            locale: Locale::default(),
            notification_secs: DEFAULT_NOTIFICATION_SECS,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Applies command line / environment values on top of the file values.
    pub fn with_overrides(mut self, api_base_url: Option<String>, locale: Option<Locale>) -> Self {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::info!(
                "No dashboard config at {} ({err}); using backend {DEFAULT_API_BASE_URL}",
                path.display()
            );
            return AppConfig::default();
        }
    };

    match serde_json::from_str::<AppConfig>(&content) {
        Ok(config) => {
            log::debug!(
                "Dashboard config {} points at {}",
                path.display(),
                config.api_base_url
            );
            config
        }
        Err(err) => {
            log::warn!(
                "Ignoring malformed dashboard config {}: {err}",
                path.display()
            );
            AppConfig::default()
        }
    }
}

/// Writes `config` as pretty JSON, creating the parent directory if needed.
pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    let path = Path::new(path);
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');
    fs::write(path, json)?;
    log::debug!("Saved dashboard config to {}", path.display());
    Ok(())
}
