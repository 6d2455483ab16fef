//! Image generation endpoint

use super::param_or_default;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "Painting a picture of blue water and blue sky.".to_string()
}

/// Image generation endpoint
pub async fn gen_img(
    state: web::Data<AppState>,
    query: web::Query<ImageQuery>,
) -> Result<HttpResponse> {
    info!("Image generation request");

    let prompt = param_or_default(query.into_inner().prompt, default_prompt);
    let response = state.images.gen_img(&prompt).await?;
    Ok(HttpResponse::Ok().json(response))
}
