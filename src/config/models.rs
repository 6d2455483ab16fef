//! Configuration models

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the server bind address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }
        Ok(())
    }
}

/// CORS configuration
///
/// The demo permits cross-origin requests on all routes; `enabled` exists so
/// deployments can turn the permissive policy off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Whether the permissive CORS policy is applied
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Preflight cache lifetime in seconds
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_age: default_cors_max_age(),
        }
    }
}

/// DashScope API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashScopeConfig {
    /// API key; falls back to the DASHSCOPE_API_KEY environment variable
    #[serde(default)]
    pub api_key: String,
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for chat/completion capabilities
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Model used for image synthesis
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Model used for speech synthesis
    #[serde(default = "default_speech_model")]
    pub speech_model: String,
    /// Model used for audio transcription
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,
    /// Model used for text embedding
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    /// Delay between polls of asynchronous vendor tasks, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Maximum number of polls before an asynchronous task is abandoned
    #[serde(default = "default_poll_attempts")]
    pub poll_attempts: u32,
}

impl Default for DashScopeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            chat_model: default_chat_model(),
            image_model: default_image_model(),
            speech_model: default_speech_model(),
            transcription_model: default_transcription_model(),
            embedding_model: default_embedding_model(),
            poll_interval_ms: default_poll_interval_ms(),
            poll_attempts: default_poll_attempts(),
        }
    }
}

impl DashScopeConfig {
    /// Fill the API key from the environment when the file left it empty
    pub fn apply_env(&mut self) {
        if self.api_key.is_empty() {
            if let Ok(key) = std::env::var("DASHSCOPE_API_KEY") {
                self.api_key = key;
            }
        }
        if let Ok(url) = std::env::var("DASHSCOPE_BASE_URL") {
            self.base_url = url;
        }
    }

    /// Validate DashScope configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }
        if self.poll_attempts == 0 {
            return Err("Poll attempts cannot be 0".to_string());
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_cors_max_age() -> u64 {
    3600
}

fn default_base_url() -> String {
    "https://dashscope.aliyuncs.com".to_string()
}

fn default_chat_model() -> String {
    "qwen-turbo".to_string()
}

fn default_image_model() -> String {
    "wanx-v1".to_string()
}

fn default_speech_model() -> String {
    "sambert-zhichu-v1".to_string()
}

fn default_transcription_model() -> String {
    "paraformer-v2".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-v1".to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_poll_attempts() -> u32 {
    30
}
