//! Text embedding endpoint

use super::param_or_default;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct EmbeddingQuery {
    #[serde(default = "default_text")]
    pub text: String,
}

fn default_text() -> String {
    "Spring Cloud Alibaba AI 框架！".to_string()
}

/// Text embedding endpoint
pub async fn text_embedding(
    state: web::Data<AppState>,
    query: web::Query<EmbeddingQuery>,
) -> Result<HttpResponse> {
    info!("Text embedding request");

    let text = param_or_default(query.into_inner().text, default_text);
    let embedding = state.text_embedding.text_embedding(&text).await?;
    Ok(HttpResponse::Ok().json(embedding))
}
