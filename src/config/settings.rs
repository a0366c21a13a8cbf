//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote image-generation service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API credential. Required; empty means the process refuses to start.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

fn default_timeout() -> u64 {
    60000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_ms: default_timeout(),
        }
    }
}

/// Output configuration for saved images
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

fn default_output_dir() -> String {
    "./generated_images".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .set_default("api.base_url", default_base_url())?
            .set_default("api.model", default_model())?
            .set_default("api.timeout_ms", default_timeout())?
            .set_default("output.dir", default_output_dir())?
            .set_default("logging.level", default_log_level())?
            .add_source(
                File::with_name(path.as_ref().to_str().unwrap_or("config/default"))
                    .required(false),
            )
            // Override with environment variables (prefixed with TAPESTRY_)
            .add_source(
                Environment::with_prefix("TAPESTRY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;

        // The bare API_KEY variable wins when set, matching the service's
        // conventional credential name.
        if let Ok(key) = std::env::var("API_KEY") {
            if !key.is_empty() {
                settings.api.api_key = key;
            }
        }

        Ok(settings)
    }

    /// Validate the configuration. A missing credential is a fatal startup
    /// condition, not a per-call error.
    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.trim().is_empty() {
            return Err(AppError::MissingApiKey);
        }
        if self.api.base_url.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "api.base_url cannot be empty".to_string(),
            )));
        }
        if self.api.timeout_ms == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "api.timeout_ms cannot be 0".to_string(),
            )));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
