//! Speech synthesis and audio transcription

use super::{DashScopeClient, TaskSubmit};
use crate::utils::error::{Result, TongYiError};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Path for the speech synthesis API
pub const SPEECH_SYNTHESIS_PATH: &str = "/api/v1/services/audio/tts/speech-synthesis";

/// Path for the audio transcription API
pub const TRANSCRIPTION_PATH: &str = "/api/v1/services/audio/asr/transcription";

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: SpeechInput<'a>,
}

#[derive(Debug, Serialize)]
struct SpeechInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct TranscriptionRequest<'a> {
    model: &'a str,
    input: TranscriptionInput<'a>,
}

#[derive(Debug, Serialize)]
struct TranscriptionInput<'a> {
    file_urls: Vec<&'a str>,
}

/// Task payload returned once transcription succeeds
#[derive(Debug, Deserialize)]
struct TranscriptionTaskResult {
    results: Vec<TranscriptionResult>,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResult {
    #[serde(default)]
    text: Option<String>,
}

impl DashScopeClient {
    /// Synthesize speech for a text and return the raw audio bytes
    pub async fn synthesize_speech(&self, text: &str) -> Result<Bytes> {
        let request = SpeechRequest {
            model: &self.config().speech_model,
            input: SpeechInput { text },
        };

        let response = self.post_raw(SPEECH_SYNTHESIS_PATH, &request, &[]).await?;
        Ok(response.bytes().await?)
    }

    /// Transcribe the audio file at `url` and return the recognized text
    ///
    /// Transcription is an asynchronous vendor task: submit, then poll.
    pub async fn transcribe(&self, url: &str) -> Result<String> {
        let request = TranscriptionRequest {
            model: &self.config().transcription_model,
            input: TranscriptionInput {
                file_urls: vec![url],
            },
        };

        let submit: TaskSubmit = self
            .post_json(TRANSCRIPTION_PATH, &request, &[("X-DashScope-Async", "enable")])
            .await?;

        let result: TranscriptionTaskResult = self
            .wait_for_task(&submit.output.task_id, "transcription")
            .await?;

        let text: Vec<String> = result.results.into_iter().filter_map(|r| r.text).collect();
        if text.is_empty() {
            return Err(TongYiError::provider("transcription task returned no text"));
        }
        Ok(text.join("\n"))
    }
}
