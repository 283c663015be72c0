use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::selector::DEFAULT_INACTIVITY_TIMEOUT;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub catalog_path: PathBuf,
    pub selector_timeout_ms: u64,
    pub tick_interval_ms: u64,
    pub log_filter: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data.json"),
            selector_timeout_ms: DEFAULT_INACTIVITY_TIMEOUT.as_millis() as u64,
            tick_interval_ms: 100,
            log_filter: "info".into(),
        }
    }
}

impl ShopConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn selector_timeout(&self) -> Duration {
        Duration::from_millis(self.selector_timeout_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Overlays `SHOP_*` environment variables. Values that fail to parse are
    /// ignored.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("SHOP_CATALOG_PATH") {
            self.catalog_path = PathBuf::from(v);
        }
        if let Some(ms) = var("SHOP_SELECTOR_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.selector_timeout_ms = ms;
        }
        if let Some(ms) = var("SHOP_TICK_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            self.tick_interval_ms = ms;
        }
        if let Some(v) = var("SHOP_LOG") {
            self.log_filter = v;
        }
    }
}

/// Defaults, then `shop.toml` in the working directory, then the environment.
pub fn load_config() -> ShopConfig {
    load_config_from("shop.toml")
}

pub fn load_config_from(path: impl AsRef<std::path::Path>) -> ShopConfig {
    let mut config = std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| match ShopConfig::from_toml_str(&raw) {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed shop config");
                None
            }
        })
        .unwrap_or_default();

    config.apply_env(|key| std::env::var(key).ok());
    config
}
