//! Application state shared across HTTP handlers
//!
//! Capability services are resolved from the [`ServiceRegistry`] once, when
//! the state is built; handlers hold direct references and never look
//! services up by name at call time.

use crate::services::{ServiceRegistry, TongYiService};
use crate::utils::error::{Result, TongYiError};
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// General and streaming completion
    pub simple: Arc<dyn TongYiService>,
    /// Structured output parsing
    pub output_parse: Arc<dyn TongYiService>,
    /// Prompt templating
    pub prompt_template: Arc<dyn TongYiService>,
    /// Role-based chat
    pub roles: Arc<dyn TongYiService>,
    /// Retrieval-augmented "stuff" completion
    pub stuff: Arc<dyn TongYiService>,
    /// Image generation
    pub images: Arc<dyn TongYiService>,
    /// Speech synthesis
    pub audio_speech: Arc<dyn TongYiService>,
    /// Audio transcription
    pub audio_transcription: Arc<dyn TongYiService>,
    /// Text embedding
    pub text_embedding: Arc<dyn TongYiService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Resolve every capability from the registry
    ///
    /// Fails with a configuration error when a capability has no registered
    /// service, so wiring mistakes surface at startup rather than per request.
    pub fn from_registry(registry: &ServiceRegistry) -> Result<Self> {
        let resolve = |name: &str| {
            registry.get(name).ok_or_else(|| {
                TongYiError::config(format!("no service registered for capability '{}'", name))
            })
        };

        Ok(Self {
            simple: resolve("simple")?,
            output_parse: resolve("output_parse")?,
            prompt_template: resolve("prompt_template")?,
            roles: resolve("roles")?,
            stuff: resolve("stuff")?,
            images: resolve("images")?,
            audio_speech: resolve("audio_speech")?,
            audio_transcription: resolve("audio_transcription")?,
            text_embedding: resolve("text_embedding")?,
        })
    }

    /// Build a state where every capability resolves to the same service
    pub fn with_service(service: Arc<dyn TongYiService>) -> Self {
        Self {
            simple: Arc::clone(&service),
            output_parse: Arc::clone(&service),
            prompt_template: Arc::clone(&service),
            roles: Arc::clone(&service),
            stuff: Arc::clone(&service),
            images: Arc::clone(&service),
            audio_speech: Arc::clone(&service),
            audio_transcription: Arc::clone(&service),
            text_embedding: service,
        }
    }
}
