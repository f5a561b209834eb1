use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::domain::logging::LogLevel;

/// Id of the optional `<script type="application/json">` element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "price-graph-config";

/// Runtime settings. Every field has a default, so a partial document is enough.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the price-history service, without trailing slash.
    pub api_base_url: String,
    pub vs_currency: String,
    pub days: u32,
    pub request_timeout_ms: u32,
    pub default_coin: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            vs_currency: "usd".to_string(),
            days: 7,
            request_timeout_ms: 10_000,
            default_coin: "bitcoin".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> LogLevel {
        self.log_level.parse().unwrap_or(LogLevel::Info)
    }

    /// Read overrides from the config element, `Ok(None)` when the page has none.
    pub fn read_from_document() -> serde_json::Result<Option<Self>> {
        let text = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());
        text.map(|json| Self::from_json(&json)).transpose()
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Install the process-wide configuration. The first call wins.
pub fn init_config(config: AppConfig) {
    let _ = CONFIG.set(config);
}

/// Process-wide configuration, defaults when never initialized.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
