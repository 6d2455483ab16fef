//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, TongYiError};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| TongYiError::config("Configuration is required"))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    dotenvy::dotenv().ok();

    info!("Starting TongYi demo server");

    let config_path = "config/tongyi.yaml";
    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Configuration file loaded: {}", config_path);
            config
        }
        Err(e) => {
            info!(
                "Configuration file not loaded ({}), falling back to environment defaults",
                e
            );
            Config::from_env()?
        }
    };

    let server = HttpServer::new(&config)?;
    info!("Server starting at: http://{}", config.server.address());
    info!("API Endpoints:");
    info!("   GET /health - Health check");
    info!("   GET /ai/example - Completion");
    info!("   GET /ai/stream - Streaming completion");
    info!("   GET /ai/output - Structured output");
    info!("   GET /ai/prompt-tmpl - Prompt template");
    info!("   GET /ai/roles - Role-based chat");
    info!("   GET /ai/stuff - Stuff completion");
    info!("   GET /ai/img - Image generation");
    info!("   GET /ai/audio/speech - Speech synthesis");
    info!("   GET /ai/audio/transcription - Audio transcription");
    info!("   GET /ai/textEmbedding - Text embedding");

    server.start().await
}
