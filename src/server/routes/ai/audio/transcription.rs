//! Audio transcription endpoint
//!
//! The only route with branching logic: the audio URL must match the `.wav`
//! pattern before any upstream call is made, and upstream failures are
//! wrapped with the original cause retained.

use crate::server::routes::ai::param_or_default;
use crate::server::state::AppState;
use crate::services::TongYiService;
use crate::utils::error::{Result, TongYiError};
use actix_web::{web, HttpResponse};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{error, info};

/// Accepted transcription sources: http(s) URLs ending in ".wav"
static WAV_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+\.wav$").expect("valid wav URL pattern"));

const DEFAULT_AUDIO_URL: &str =
    "https://dashscope.oss-cn-beijing.aliyuncs.com/samples/audio/paraformer/realtime_asr_example.wav";

#[derive(Debug, Deserialize)]
pub struct TranscriptionQuery {
    #[serde(rename = "audioUrls", default = "default_audio_url")]
    pub audio_urls: String,
}

fn default_audio_url() -> String {
    DEFAULT_AUDIO_URL.to_string()
}

/// Whether a URL is an acceptable transcription source
pub(crate) fn is_valid_audio_url(url: &str) -> bool {
    WAV_URL.is_match(url)
}

/// Validate the URL, then delegate; wrap upstream failures with their cause
pub(crate) async fn transcribe_checked(service: &dyn TongYiService, url: &str) -> Result<String> {
    if !is_valid_audio_url(url) {
        return Err(TongYiError::validation("Invalid URL provided."));
    }

    match service.audio_transcription(url).await {
        Ok(text) => Ok(text),
        Err(e) => {
            error!("Failed to transcribe audio: {}", e);
            Err(TongYiError::transcription(
                "Failed to process audio transcription.",
                e,
            ))
        }
    }
}

/// Audio transcription endpoint
pub async fn audio_transcription(
    state: web::Data<AppState>,
    query: web::Query<TranscriptionQuery>,
) -> Result<HttpResponse> {
    info!("Audio transcription request");

    let url = param_or_default(query.into_inner().audio_urls, default_audio_url);
    let text = transcribe_checked(state.audio_transcription.as_ref(), &url).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(text))
}
