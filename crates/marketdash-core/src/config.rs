//! Application configuration management.
//!
//! This module handles loading the dashboard configuration: the page origin,
//! an optional API base override, the request timeout and the cache TTL.
//!
//! Configuration is stored at `~/.config/marketdash/config.json`. The
//! `MARKETDASH_API_BASE` and `MARKETDASH_ORIGIN` environment variables are
//! read once at load and take precedence over the file.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "marketdash";

/// Config file name
const CONFIG_FILE: &str = "config.json";

const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

pub const API_BASE_ENV_VAR: &str = "MARKETDASH_API_BASE";
pub const ORIGIN_ENV_VAR: &str = "MARKETDASH_ORIGIN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin of the hosting page; used for referral links and live sockets
    pub origin: String,
    /// Overrides `<origin>/api` when set
    pub api_base: Option<String>,
    pub request_timeout_ms: u64,
    pub cache_ttl_secs: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            api_base: None,
            request_timeout_ms: crate::api::DEFAULT_TIMEOUT_MS,
            cache_ttl_secs: crate::cache::DEFAULT_TTL_SECS,
        }
    }
}

impl Config {
    /// Load the config file (defaults when missing), then apply env overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(base) = std::env::var(API_BASE_ENV_VAR) {
            if !base.trim().is_empty() {
                self.api_base = Some(base.trim().to_string());
            }
        }
        if let Ok(origin) = std::env::var(ORIGIN_ENV_VAR) {
            if !origin.trim().is_empty() {
                self.origin = origin.trim().to_string();
            }
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Origin without a trailing slash.
    pub fn origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }

    /// The API base: the override when set, otherwise `<origin>/api`.
    pub fn api_base(&self) -> String {
        match self.api_base {
            Some(ref base) => base.trim_end_matches('/').to_string(),
            None => format!("{}/api", self.origin()),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache_ttl_secs)
    }

    /// Directory for the session cache files.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME).join("session"))
    }
}
