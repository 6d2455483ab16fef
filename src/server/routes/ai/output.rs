//! Structured output endpoint

use super::param_or_default;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct OutputQuery {
    #[serde(default = "default_actor")]
    pub actor: String,
}

fn default_actor() -> String {
    "Jeff Bridges".to_string()
}

/// Structured filmography endpoint
pub async fn gen_output_parse(
    state: web::Data<AppState>,
    query: web::Query<OutputQuery>,
) -> Result<HttpResponse> {
    info!("Structured output request");

    let actor = param_or_default(query.into_inner().actor, default_actor);
    let films = state.output_parse.gen_output_parse(&actor).await?;
    Ok(HttpResponse::Ok().json(films))
}
