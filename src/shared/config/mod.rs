//! Application configuration module
//!
//! Settings are resolved in three layers: built-in defaults, an optional
//! TOML file, then environment variables.
//!
//! ```toml
//! server_url = "https://factual.example.org"
//! refresh_interval_secs = 240
//! request_timeout_secs = 30
//! session_path = "/home/reader/.config/factual/session.json"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Default backend origin
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
/// Default token refresh period
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(240);
/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const CONFIG_ENV: &str = "FACTUAL_CONFIG";
const SERVER_URL_ENV: &str = "FACTUAL_API_URL";
const REFRESH_ENV: &str = "FACTUAL_REFRESH_SECS";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub server_url: String,
    /// Period of the token refresh timer
    pub refresh_interval: Duration,
    /// Timeout applied to every backend request
    pub request_timeout: Duration,
    /// Where the session tokens are persisted
    pub session_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            session_path: default_session_path(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Resolve defaults, the config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();

        let file = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("factual").join("config.toml")));
        if let Some(path) = file.filter(|p| p.exists()) {
            tracing::debug!(path = %path.display(), "loading config file");
            builder = builder.file(FileConfig::read(&path)?);
        }

        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            builder = builder.server_url(url);
        }
        if let Ok(secs) = std::env::var(REFRESH_ENV) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue(REFRESH_ENV, secs.clone()))?;
            builder = builder.refresh_interval(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.server_url)
            .map_err(|_| ConfigError::InvalidUrl(self.server_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(self.server_url.clone()));
        }
        if self.refresh_interval.is_zero() {
            return Err(ConfigError::InvalidValue("refresh_interval", "0".to_string()));
        }
        Ok(())
    }
}

/// Shape of the optional TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub session_path: Option<PathBuf>,
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.display().to_string(), e.to_string()))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    refresh_interval: Option<Duration>,
    request_timeout: Option<Duration>,
    session_path: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = Some(interval);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = Some(path.into());
        self
    }

    /// Apply every value present in a config file.
    pub fn file(mut self, file: FileConfig) -> Self {
        if let Some(url) = file.server_url {
            self.server_url = Some(url);
        }
        if let Some(secs) = file.refresh_interval_secs {
            self.refresh_interval = Some(Duration::from_secs(secs));
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(path) = file.session_path {
            self.session_path = Some(path);
        }
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_url: self
                .server_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.server_url),
            refresh_interval: self.refresh_interval.unwrap_or(defaults.refresh_interval),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            session_path: self.session_path.unwrap_or(defaults.session_path),
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_session_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("factual")
        .join("session.json")
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("cannot read config file {0}: {1}")]
    Read(String, String),
    #[error("invalid config file: {0}")]
    Parse(String),
}
