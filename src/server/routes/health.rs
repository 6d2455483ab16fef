//! Health check endpoint

use actix_web::HttpResponse;

/// Health check
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": crate::NAME,
        "version": crate::VERSION,
    }))
}
