//! Completion endpoints (single-shot and streaming)

use super::param_or_default;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct CompletionQuery {
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_message() -> String {
    "Tell me a joke".to_string()
}

#[derive(Debug, Deserialize)]
pub struct StreamQuery {
    #[serde(default = "default_stream_message")]
    pub message: String,
}

fn default_stream_message() -> String {
    "请告诉我西红柿炖牛腩怎么做？".to_string()
}

/// General completion endpoint
pub async fn completion(
    state: web::Data<AppState>,
    query: web::Query<CompletionQuery>,
) -> Result<HttpResponse> {
    info!("Completion request");

    let message = param_or_default(query.into_inner().message, default_message);
    let text = state.simple.completion(&message).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(text))
}

/// Streaming completion endpoint; collected chunks keyed by arrival order
pub async fn stream_completion(
    state: web::Data<AppState>,
    query: web::Query<StreamQuery>,
) -> Result<HttpResponse> {
    info!("Streaming completion request");

    let message = param_or_default(query.into_inner().message, default_stream_message);
    let chunks = state.simple.stream_completion(&message).await?;
    Ok(HttpResponse::Ok().json(chunks))
}
