use crate::core::{AppError, Result};
use crate::modules::platform::PlatformGeneration;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub mod document;

pub use document::{DocumentSettings, TaxMode, TaxTotalDisplay};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub document: DocumentSettings,
    pub platform: PlatformGeneration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// "pretty" or "json"
    pub log_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".to_string(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
            document: DocumentSettings::from_env()?,
            platform: env::var("DOC_PLATFORM")
                .unwrap_or_else(|_| "current".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid DOC_PLATFORM".to_string()))?,
        };

        Ok(config)
    }

    /// Load configuration from a YAML file; missing keys take defaults
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.app.log_format.as_str(), "pretty" | "json") {
            return Err(AppError::Configuration(format!(
                "Invalid log format: {}",
                self.app.log_format
            )));
        }

        self.document.validate()
    }
}
