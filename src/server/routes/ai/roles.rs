//! Role-based chat endpoint

use super::param_or_default;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct RolesQuery {
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_voice")]
    pub voice: String,
}

fn default_message() -> String {
    "Tell me about three famous pirates from the Golden Age of Piracy and why they did.  \
     Write at least a sentence for each pirate."
        .to_string()
}

fn default_name() -> String {
    "bot".to_string()
}

fn default_voice() -> String {
    "pirate".to_string()
}

/// Role-based chat endpoint
pub async fn gen_role(
    state: web::Data<AppState>,
    query: web::Query<RolesQuery>,
) -> Result<HttpResponse> {
    info!("Role-play request");

    let query = query.into_inner();
    let message = param_or_default(query.message, default_message);
    let name = param_or_default(query.name, default_name);
    let voice = param_or_default(query.voice, default_voice);
    let response = state.roles.gen_role(&message, &name, &voice).await?;
    Ok(HttpResponse::Ok().json(response))
}
