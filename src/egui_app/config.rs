use std::path::Path;
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Client-side configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the configuration from file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self { app: AppConfig::load()? })
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    pub fn refresh_interval(&self) -> Duration {
        self.app.refresh_interval
    }

    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout
    }

    pub fn session_path(&self) -> &Path {
        &self.app.session_path
    }
}

impl From<AppConfig> for Config {
    fn from(app: AppConfig) -> Self {
        Self { app }
    }
}
