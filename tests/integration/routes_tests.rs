//! End-to-end tests of the HTTP surface
//!
//! The full application (CORS, logging, routes) is assembled the same way
//! the real server assembles it, with stub capability services behind it.

use crate::common::{NoCapabilityService, StubService};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use std::collections::BTreeMap;
use std::sync::Arc;
use tongyi_rs::config::CorsConfig;
use tongyi_rs::server::server::create_app;
use tongyi_rs::server::AppState;

fn stub_state() -> web::Data<AppState> {
    web::Data::new(AppState::with_service(Arc::new(StubService)))
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn example_route_returns_plain_text() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/example").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    assert_eq!(body, "completion: Tell me a joke");
}

#[actix_web::test]
async fn example_route_passes_parameter_through() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/ai/example?message=hello")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body = test::read_body(resp).await;
    assert_eq!(body, "completion: hello");
}

#[actix_web::test]
async fn empty_parameter_falls_back_to_default() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/ai/example?message=")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body = test::read_body(resp).await;
    assert_eq!(body, "completion: Tell me a joke");
}

#[actix_web::test]
async fn stream_route_returns_chunk_map() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/stream").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: BTreeMap<String, String> = test::read_body_json(resp).await;
    assert_eq!(
        body.get("000").map(String::as_str),
        Some("stream: 请告诉我西红柿炖牛腩怎么做？")
    );
}

#[actix_web::test]
async fn output_route_returns_structured_object() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/output").to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["actor"], "Jeff Bridges");
    assert!(body["movies"].is_array());
}

#[actix_web::test]
async fn prompt_tmpl_route_uses_defaults() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/prompt-tmpl").to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], "a funny joke about cows");
}

#[actix_web::test]
async fn roles_route_carries_persona_metadata() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/roles").to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["metadata"]["name"], "bot");
    assert_eq!(body["metadata"]["voice"], "pirate");
}

#[actix_web::test]
async fn stuff_route_defaults_to_unstuffed() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/stuff").to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["text"], "I don't know.");
}

#[actix_web::test]
async fn stuff_route_forwards_stuffit_flag() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/ai/stuff?stuffit=true")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["text"], "Constantini and Mosaner");
}

#[actix_web::test]
async fn img_route_returns_image_urls() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/img").to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["images"][0]["url"], "https://example.com/img.png");
}

#[actix_web::test]
async fn audio_speech_route_returns_opaque_text() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/audio/speech").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(test::read_body(resp).await, "UklGRg==");
}

#[actix_web::test]
async fn transcription_route_accepts_default_sample_url() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/ai/audio/transcription")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "hello world");
}

#[actix_web::test]
async fn transcription_route_rejects_non_wav_url() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/ai/audio/transcription?audioUrls=https%3A%2F%2Fexample.com%2Fa.mp3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn text_embedding_route_returns_float_array() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/textEmbedding").to_request();
    let resp = test::call_service(&app, req).await;

    let body: Vec<f64> = test::read_body_json(resp).await;
    assert_eq!(body, vec![0.25, -0.5]);
}

#[actix_web::test]
async fn cross_origin_requests_are_permitted() {
    let app = test::init_service(create_app(stub_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/ai/example")
        .insert_header(("Origin", "https://example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(resp
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[actix_web::test]
async fn missing_capability_maps_to_not_implemented() {
    let state = web::Data::new(AppState::with_service(Arc::new(NoCapabilityService)));
    let app = test::init_service(create_app(state, &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/ai/example").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "NOT_IMPLEMENTED");
}
