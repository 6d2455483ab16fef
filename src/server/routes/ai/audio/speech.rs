//! Speech synthesis endpoint

use crate::server::routes::ai::param_or_default;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct SpeechQuery {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "你好，Spring Cloud Alibaba AI 框架！".to_string()
}

/// Speech synthesis endpoint; returns an opaque text representation of the
/// synthesized audio
pub async fn audio_speech(
    state: web::Data<AppState>,
    query: web::Query<SpeechQuery>,
) -> Result<HttpResponse> {
    info!("Speech synthesis request");

    let prompt = param_or_default(query.into_inner().prompt, default_prompt);
    let audio = state.audio_speech.gen_audio(&prompt).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(audio))
}
