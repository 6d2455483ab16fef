//! Prompt template endpoint

use super::param_or_default;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct PromptTemplateQuery {
    #[serde(default = "default_adjective")]
    pub adjective: String,
    #[serde(default = "default_topic")]
    pub topic: String,
}

fn default_adjective() -> String {
    "funny".to_string()
}

fn default_topic() -> String {
    "cows".to_string()
}

/// Prompt template endpoint
pub async fn gen_prompt_templates(
    state: web::Data<AppState>,
    query: web::Query<PromptTemplateQuery>,
) -> Result<HttpResponse> {
    info!("Prompt template request");

    let query = query.into_inner();
    let adjective = param_or_default(query.adjective, default_adjective);
    let topic = param_or_default(query.topic, default_topic);
    let message = state
        .prompt_template
        .gen_prompt_templates(&adjective, &topic)
        .await?;
    Ok(HttpResponse::Ok().json(message))
}
