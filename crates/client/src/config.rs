//! Client configuration.
//!
//! Resolution order:
//! 1. A persisted override (`localStorage` on the web, a JSON file in the
//!    platform config directory on desktop).
//! 2. The environment:
//!    - `SERVERDECK_API_URL`: host or URL of the console API (default: same origin)
//!    - `SERVERDECK_LOCALE`: UI locale tag (default: "en")

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::i18n::{resolve_locale, DEFAULT_LOCALE};

const CONFIG_KEY: &str = "serverdeck_config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Host or URL of the console API. Empty means relative paths.
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            locale: default_locale(),
        }
    }
}

impl ClientConfig {
    /// Load the persisted override, or fall back to the environment.
    pub fn load() -> anyhow::Result<Self> {
        let config = match load_persisted() {
            Some(config) => config,
            None => Self::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("SERVERDECK_API_URL").unwrap_or_default();
        let locale = std::env::var("SERVERDECK_LOCALE")
            .map(|tag| resolve_locale(&tag).to_string())
            .unwrap_or_else(|_| default_locale());
        Self {
            api_base_url,
            locale,
        }
    }

    /// The web build talks to its own origin and follows the browser language.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let locale = web_sys::window()
            .and_then(|window| window.navigator().language())
            .map(|tag| resolve_locale(&tag).to_string())
            .unwrap_or_else(default_locale);
        Self {
            api_base_url: String::new(),
            locale,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let base = self.base_url();
        if !base.is_empty() {
            url::Url::parse(&base)
                .with_context(|| format!("invalid API base URL `{}`", self.api_base_url))?;
        }
        Ok(())
    }

    /// Persist this configuration as the override for future launches.
    pub fn save(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string(self).context("failed to encode client config")?;
        save_persisted(&json)
    }

    /// Normalized base URL, without a trailing slash.
    pub fn base_url(&self) -> String {
        let host = self.api_base_url.trim();
        if host.is_empty() {
            return String::new();
        }

        if host.contains("://") {
            return host.trim_end_matches('/').to_string();
        }

        let host = host.trim_end_matches('/');
        if is_local_host(host) {
            format!("http://{host}")
        } else {
            format!("https://{host}")
        }
    }
}

fn is_local_host(host: &str) -> bool {
    let host = host.split(':').next().unwrap_or(host);
    host == "localhost"
        || host == "127.0.0.1"
        || host == "0.0.0.0"
        || host.starts_with("192.168.")
        || host.starts_with("10.")
}

fn load_persisted() -> Option<ClientConfig> {
    let json = load_raw()?;
    serde_json::from_str(&json).ok()
}

// =========================================
// Web (WASM) persistence
// =========================================

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn load_raw() -> Option<String> {
    local_storage()?.get_item(CONFIG_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
fn save_persisted(json: &str) -> anyhow::Result<()> {
    let storage = local_storage().context("localStorage is unavailable")?;
    storage
        .set_item(CONFIG_KEY, json)
        .map_err(|_| anyhow::anyhow!("failed to write client config to localStorage"))
}

// =========================================
// Desktop (native) persistence
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<std::path::PathBuf> {
    Some(dirs::config_dir()?.join("serverdeck").join(format!("{CONFIG_KEY}.json")))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw() -> Option<String> {
    std::fs::read_to_string(config_path()?).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn save_persisted(json: &str) -> anyhow::Result<()> {
    let path = config_path().context("no platform config directory")?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_base(api_base_url: &str) -> ClientConfig {
        ClientConfig {
            api_base_url: api_base_url.to_string(),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn empty_base_means_same_origin() {
        assert_eq!(ClientConfig::default().base_url(), "");
        assert_eq!(with_base("   ").base_url(), "");
    }

    #[test]
    fn bare_hosts_get_a_scheme() {
        assert_eq!(with_base("localhost:8080").base_url(), "http://localhost:8080");
        assert_eq!(with_base("10.0.0.4").base_url(), "http://10.0.0.4");
        assert_eq!(with_base("console.example.com/").base_url(), "https://console.example.com");
    }

    #[test]
    fn explicit_scheme_is_kept() {
        assert_eq!(with_base("http://console.internal/").base_url(), "http://console.internal");
    }

    #[test]
    fn validate_rejects_malformed_urls() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(with_base("console.example.com").validate().is_ok());
        assert!(with_base("http://exa mple.com").validate().is_err());
    }

    #[test]
    fn persisted_json_fills_missing_fields() {
        let config: ClientConfig = serde_json::from_str(r#"{"apiBaseUrl":"localhost:3000"}"#).unwrap();
        assert_eq!(config.locale, DEFAULT_LOCALE);
        assert_eq!(config.base_url(), "http://localhost:3000");
    }
}
