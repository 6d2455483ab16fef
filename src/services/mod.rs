//! Capability services
//!
//! One service per TongYi capability, all behind the shared [`TongYiService`]
//! trait. A [`ServiceRegistry`] maps capability names to implementations;
//! handlers never resolve services by name at call time; the registry is
//! consulted once when the application state is built.

mod audio_speech;
mod audio_transcription;
mod images;
mod output_parse;
mod prompt_template;
mod roles;
mod simple;
mod stuff;
mod text_embedding;
pub mod types;

pub use audio_speech::AudioSpeechService;
pub use audio_transcription::AudioTranscriptionService;
pub use images::ImagesService;
pub use output_parse::OutputParseService;
pub use prompt_template::PromptTemplateService;
pub use roles::RolesService;
pub use simple::SimpleService;
pub use stuff::StuffService;
pub use text_embedding::TextEmbeddingService;

pub use types::{ActorsFilms, AssistantMessage, Completion, GeneratedImage, ImageResponse};

use crate::dashscope::DashScopeClient;
use crate::utils::error::{Result, TongYiError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

#[cfg(test)]
use mockall::automock;

/// Shared interface of all TongYi capability services
///
/// Every operation has a default body that fails with an unsupported-capability
/// error; each concrete service overrides only the operations it provides.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TongYiService: Send + Sync {
    /// Capability name the service is registered under
    fn name(&self) -> &'static str;

    /// General completion for an input message
    async fn completion(&self, message: &str) -> Result<String> {
        let _ = message;
        Err(TongYiError::unsupported(self.name(), "completion"))
    }

    /// Streaming completion; chunks keyed by arrival order
    async fn stream_completion(&self, message: &str) -> Result<BTreeMap<String, String>> {
        let _ = message;
        Err(TongYiError::unsupported(self.name(), "stream_completion"))
    }

    /// Structured filmography for an actor
    async fn gen_output_parse(&self, actor: &str) -> Result<ActorsFilms> {
        let _ = actor;
        Err(TongYiError::unsupported(self.name(), "gen_output_parse"))
    }

    /// Completion from a rendered prompt template
    async fn gen_prompt_templates(
        &self,
        adjective: &str,
        topic: &str,
    ) -> Result<AssistantMessage> {
        let _ = (adjective, topic);
        Err(TongYiError::unsupported(self.name(), "gen_prompt_templates"))
    }

    /// Role-played completion with a named persona and voice
    async fn gen_role(&self, message: &str, name: &str, voice: &str) -> Result<AssistantMessage> {
        let _ = (message, name, voice);
        Err(TongYiError::unsupported(self.name(), "gen_role"))
    }

    /// Completion with optional context stuffing
    async fn stuff_completion(&self, message: &str, stuffit: bool) -> Result<Completion> {
        let _ = (message, stuffit);
        Err(TongYiError::unsupported(self.name(), "stuff_completion"))
    }

    /// Image generation for a prompt
    async fn gen_img(&self, prompt: &str) -> Result<ImageResponse> {
        let _ = prompt;
        Err(TongYiError::unsupported(self.name(), "gen_img"))
    }

    /// Speech synthesis; returns an opaque text representation of the audio
    async fn gen_audio(&self, prompt: &str) -> Result<String> {
        let _ = prompt;
        Err(TongYiError::unsupported(self.name(), "gen_audio"))
    }

    /// Transcription of the audio file at `url`
    async fn audio_transcription(&self, url: &str) -> Result<String> {
        let _ = url;
        Err(TongYiError::unsupported(self.name(), "audio_transcription"))
    }

    /// Embedding vector for a text
    async fn text_embedding(&self, text: &str) -> Result<Vec<f64>> {
        let _ = text;
        Err(TongYiError::unsupported(self.name(), "text_embedding"))
    }
}

/// Registry mapping capability names to service implementations
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<String, Arc<dyn TongYiService>>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service under its capability name
    pub fn register(&mut self, service: Arc<dyn TongYiService>) {
        info!("Registered service: {}", service.name());
        self.services.insert(service.name().to_string(), service);
    }

    /// Look up a service by capability name
    pub fn get(&self, name: &str) -> Option<Arc<dyn TongYiService>> {
        self.services.get(name).cloned()
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Build a registry with every DashScope-backed service registered
    pub fn with_dashscope(client: Arc<DashScopeClient>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SimpleService::new(Arc::clone(&client))));
        registry.register(Arc::new(OutputParseService::new(Arc::clone(&client))));
        registry.register(Arc::new(PromptTemplateService::new(Arc::clone(&client))));
        registry.register(Arc::new(RolesService::new(Arc::clone(&client))));
        registry.register(Arc::new(StuffService::new(Arc::clone(&client))));
        registry.register(Arc::new(ImagesService::new(Arc::clone(&client))));
        registry.register(Arc::new(AudioSpeechService::new(Arc::clone(&client))));
        registry.register(Arc::new(AudioTranscriptionService::new(Arc::clone(&client))));
        registry.register(Arc::new(TextEmbeddingService::new(client)));
        registry
    }
}
