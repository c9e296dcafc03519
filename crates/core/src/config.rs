//! Configuration management for Pets Explorer.
//!
//! Settings come either from a TOML file (pointed at by `PETS_CONFIG`) or
//! from individual environment variables. Both sources get the same
//! defaults and checks: provider base URLs fall back to the public APIs,
//! and provider API keys are always supplied externally and never defaulted.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Default upstream for dog breed data
pub const DEFAULT_DOG_API_BASE_URL: &str = "https://api.thedogapi.com";
/// Default upstream for cat breed data
pub const DEFAULT_CAT_API_BASE_URL: &str = "https://api.thecatapi.com";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dog: ProviderConfig,
    #[serde(default)]
    pub cat: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Connection settings for one breed data provider
///
/// A blank `base_url` means the species' public API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    fn finish(mut self, default_base_url: &str, key_name: &'static str) -> Result<Self> {
        if self.base_url.trim().is_empty() {
            self.base_url = default_base_url.to_string();
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Missing(key_name));
        }
        Ok(self)
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(Config {
            dog: config.dog.finish(DEFAULT_DOG_API_BASE_URL, "dog.api_key")?,
            cat: config.cat.finish(DEFAULT_CAT_API_BASE_URL, "cat.api_key")?,
            ..config
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from the TOML file named by `PETS_CONFIG`, falling back to the environment.
    pub fn load() -> Result<Self> {
        match std::env::var("PETS_CONFIG") {
            Ok(path) => Self::from_file(path),
            Err(_) => Self::from_env(),
        }
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };
        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "UPSTREAM_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(default_host),
                port,
            },
            dog: ProviderConfig {
                base_url: lookup("DOG_API_BASE_URL").unwrap_or_default(),
                api_key: required(&lookup, "DOG_API_KEY")?,
                timeout_secs,
            }
            .finish(DEFAULT_DOG_API_BASE_URL, "DOG_API_KEY")?,
            cat: ProviderConfig {
                base_url: lookup("CAT_API_BASE_URL").unwrap_or_default(),
                api_key: required(&lookup, "CAT_API_KEY")?,
                timeout_secs,
            }
            .finish(DEFAULT_CAT_API_BASE_URL, "CAT_API_KEY")?,
            logging: LoggingConfig {
                json: lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
            },
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}
