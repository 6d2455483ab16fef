//! Configuration management
//!
//! This module handles loading and validation of the server configuration.

pub mod models;

pub use models::{CorsConfig, DashScopeConfig, ServerConfig};

use crate::utils::error::{Result, TongYiError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the demo server
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// DashScope API configuration
    #[serde(default)]
    pub dashscope: DashScopeConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TongYiError::config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .map_err(|e| TongYiError::config(format!("Failed to parse config: {}", e)))?;
        config.dashscope.apply_env();

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Build a configuration from defaults plus environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Config::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| TongYiError::config(format!("Invalid SERVER_PORT: {}", port)))?;
        }
        config.dashscope.apply_env();

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .validate()
            .map_err(|e| TongYiError::config(format!("Server config error: {}", e)))?;
        self.dashscope
            .validate()
            .map_err(|e| TongYiError::config(format!("DashScope config error: {}", e)))?;
        Ok(())
    }
}
