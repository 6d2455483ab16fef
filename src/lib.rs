//! # TongYi-RS
//!
//! A demo HTTP server exposing the capabilities of the TongYi (DashScope)
//! generative-AI platform, one route per capability:
//!
//! - Text completion and streaming completion
//! - Structured output parsing
//! - Prompt templating and role-based chat
//! - Retrieval-augmented ("stuff") completion
//! - Image generation, speech synthesis, audio transcription
//! - Text embedding
//!
//! Each route is a thin delegation to a capability service selected from a
//! [`services::ServiceRegistry`] at startup.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use tongyi_rs::config::Config;
//! use tongyi_rs::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> tongyi_rs::Result<()> {
//!     let config = Config::from_file("config/tongyi.yaml").await?;
//!     let server = HttpServer::new(&config)?;
//!     server.start().await
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod dashscope;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use dashscope::DashScopeClient;
pub use services::{ServiceRegistry, TongYiService};
pub use utils::error::{Result, TongYiError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
