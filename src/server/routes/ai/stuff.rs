//! "Stuff" completion endpoint

use super::param_or_default;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct StuffQuery {
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default)]
    pub stuffit: bool,
}

fn default_message() -> String {
    "Which athletes won the mixed doubles gold medal in curling at the 2022 Winter Olympics?"
        .to_string()
}

/// "Stuff" completion endpoint
pub async fn stuff_completion(
    state: web::Data<AppState>,
    query: web::Query<StuffQuery>,
) -> Result<HttpResponse> {
    info!("Stuff completion request (stuffit={})", query.stuffit);

    let query = query.into_inner();
    let message = param_or_default(query.message, default_message);
    let completion = state.stuff.stuff_completion(&message, query.stuffit).await?;
    Ok(HttpResponse::Ok().json(completion))
}
