//! Audio transcription service

use super::TongYiService;
use crate::dashscope::DashScopeClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Transcription of audio file URLs
pub struct AudioTranscriptionService {
    client: Arc<DashScopeClient>,
}

impl AudioTranscriptionService {
    pub fn new(client: Arc<DashScopeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TongYiService for AudioTranscriptionService {
    fn name(&self) -> &'static str {
        "audio_transcription"
    }

    async fn audio_transcription(&self, url: &str) -> Result<String> {
        self.client.transcribe(url).await
    }
}
