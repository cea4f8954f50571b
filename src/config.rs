//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Service;

pub const DEFAULT_BASE_URL: &str = "https://sponsor.ajay.app";

/// Accepted hash prefix lengths (hex characters)
pub const MIN_HASH_PREFIX_LENGTH: usize = 3;
pub const MAX_HASH_PREFIX_LENGTH: usize = 32;

/// Per-client options, merged with defaults at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Base URL requests are sent to, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Length of the video hash prefix sent for private lookups.
    /// Shorter prefixes match more videos and leak less about the one requested.
    #[serde(default = "default_hash_prefix_length")]
    pub hash_prefix_length: usize,

    /// Service to query segments from
    #[serde(default)]
    pub service: Service,

    /// User agent sent with every request and with submissions
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// On-disk configuration: the local user ID plus client options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Local (unhashed) user ID. Keep it private; the service only sees it
    /// on write calls and stores the hashed form.
    pub user_id: String,

    #[serde(default)]
    pub options: Options,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_hash_prefix_length() -> usize {
    4
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            hash_prefix_length: default_hash_prefix_length(),
            service: Service::default(),
            user_agent: default_user_agent(),
        }
    }
}

impl Options {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_hash_prefix_length(mut self, len: usize) -> Self {
        self.hash_prefix_length = len;
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.service = service;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check ranges and normalize the base URL. Called once by the client.
    pub(crate) fn validated(mut self) -> Result<Self> {
        if !(MIN_HASH_PREFIX_LENGTH..=MAX_HASH_PREFIX_LENGTH).contains(&self.hash_prefix_length) {
            return Err(Error::InvalidHashPrefixLength(self.hash_prefix_length));
        }

        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }

        let url = reqwest::Url::parse(&self.base_url).map_err(|e| Error::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "expected an http(s) URL".to_string(),
            });
        }

        Ok(self)
    }
}

impl Config {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            options: Options::default(),
        }
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::from_path(&config_path)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            action: "read config file",
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Write configuration as TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::ConfigIo {
                action: "create config directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;

        std::fs::write(path, contents).map_err(|source| Error::ConfigIo {
            action: "write config file",
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get default config path
    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("app", "sponsorblock", "sponsorblock")
            .ok_or(Error::NoConfigDir)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
