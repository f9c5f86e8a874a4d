//! Application configuration.
//!
//! Configuration lives in `config.yaml` under the platform config directory
//! and covers the shop domain, the admin API key, and the request timeout.
//! Environment variables (`STOREKEEP_SHOP`, `STOREKEEP_API_KEY`) override the
//! file, so the API key can be injected from process configuration without
//! touching disk.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorekeepError};

/// Main configuration structure
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Shop domain the admin API lives under, e.g. "demo-shop.example.com"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop: Option<String>,

    /// Admin API access key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Gateway request timeout in seconds (default: 60)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_request_timeout() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shop: None,
            api_key: None,
            request_timeout: default_request_timeout(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("shop", &self.shop)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from the default config file, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific YAML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&contents)?;
        Ok(config)
    }

    /// Default config file location (`<config dir>/storekeep/config.yaml`).
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "storekeep").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(shop) = env::var("STOREKEEP_SHOP")
            && !shop.is_empty()
        {
            self.shop = Some(shop);
        }
        if let Ok(key) = env::var("STOREKEEP_API_KEY")
            && !key.is_empty()
        {
            self.api_key = Some(key);
        }
    }

    /// The shop domain, or a config error telling the operator how to set it.
    pub fn shop(&self) -> Result<&str> {
        self.shop.as_deref().ok_or_else(|| {
            StorekeepError::Config(
                "shop domain not configured. Set STOREKEEP_SHOP or add 'shop' to config.yaml"
                    .to_string(),
            )
        })
    }

    /// The admin API key. Missing credentials surface as an auth error before
    /// any gateway call is made.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            StorekeepError::Auth(
                "admin API key not configured. Set STOREKEEP_API_KEY or add 'api_key' to config.yaml"
                    .to_string(),
            )
        })
    }
}
