//! Speech synthesis service

use super::TongYiService;
use crate::dashscope::DashScopeClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;

/// Speech synthesis; the audio bytes are returned as an opaque base64 string
pub struct AudioSpeechService {
    client: Arc<DashScopeClient>,
}

impl AudioSpeechService {
    pub fn new(client: Arc<DashScopeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TongYiService for AudioSpeechService {
    fn name(&self) -> &'static str {
        "audio_speech"
    }

    async fn gen_audio(&self, prompt: &str) -> Result<String> {
        let audio = self.client.synthesize_speech(prompt).await?;
        Ok(STANDARD.encode(audio))
    }
}
