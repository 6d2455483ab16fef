//! DashScope client tests against a wiremock server

use tongyi_rs::config::DashScopeConfig;
use tongyi_rs::dashscope::audio::TRANSCRIPTION_PATH;
use tongyi_rs::dashscope::embeddings::TEXT_EMBEDDING_PATH;
use tongyi_rs::dashscope::generation::GENERATION_PATH;
use tongyi_rs::dashscope::images::IMAGE_SYNTHESIS_PATH;
use tongyi_rs::dashscope::{ChatMessage, DashScopeClient};
use tongyi_rs::TongYiError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DashScopeClient {
    let config = DashScopeConfig {
        api_key: "sk-test".to_string(),
        base_url: server.uri(),
        poll_interval_ms: 1,
        poll_attempts: 3,
        ..DashScopeConfig::default()
    };
    DashScopeClient::new(config).expect("client")
}

#[tokio::test]
async fn generate_returns_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATION_PATH))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {
                "choices": [{"message": {"role": "assistant", "content": "a joke"}}]
            },
            "request_id": "req-1"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let text = client
        .generate(vec![ChatMessage::user("Tell me a joke")])
        .await
        .expect("generate");
    assert_eq!(text, "a joke");
}

#[tokio::test]
async fn generate_maps_api_error_to_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATION_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "code": "InvalidApiKey",
            "message": "Invalid API-key provided."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate(vec![ChatMessage::user("hi")])
        .await
        .expect_err("must fail");
    assert!(matches!(err, TongYiError::Provider(_)));
    assert!(err.to_string().contains("InvalidApiKey"));
}

#[tokio::test]
async fn generate_stream_collects_chunks_in_order() {
    let server = MockServer::start().await;
    let body = concat!(
        "id:1\n",
        "event:result\n",
        "data: {\"output\":{\"choices\":[{\"message\":{\"role\":\"assistant\",\"content\":\"先\"}}]}}\n",
        "\n",
        "id:2\n",
        "event:result\n",
        "data: {\"output\":{\"choices\":[{\"message\":{\"role\":\"assistant\",\"content\":\"焯水\"}}]}}\n",
        "\n",
    );
    Mock::given(method("POST"))
        .and(path(GENERATION_PATH))
        .and(header("X-DashScope-SSE", "enable"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let chunks = client
        .generate_stream(vec![ChatMessage::user("怎么做？")])
        .await
        .expect("stream");
    assert_eq!(chunks, vec!["先".to_string(), "焯水".to_string()]);
}

#[tokio::test]
async fn embed_returns_vector() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_EMBEDDING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {
                "embeddings": [{"text_index": 0, "embedding": [0.1, -0.2, 0.3]}]
            },
            "usage": {"total_tokens": 5}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let vector = client.embed("hello").await.expect("embed");
    assert_eq!(vector, vec![0.1, -0.2, 0.3]);
}

#[tokio::test]
async fn text_to_image_submits_and_polls_task() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_SYNTHESIS_PATH))
        .and(header("X-DashScope-Async", "enable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {"task_id": "task-img", "task_status": "PENDING"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/task-img"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {
                "task_id": "task-img",
                "task_status": "SUCCEEDED",
                "results": [{"url": "https://example.com/blue.png"}]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let urls = client
        .text_to_image("blue water and blue sky")
        .await
        .expect("image");
    assert_eq!(urls, vec!["https://example.com/blue.png".to_string()]);
}

#[tokio::test]
async fn failed_task_maps_to_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_SYNTHESIS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {"task_id": "task-bad", "task_status": "PENDING"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/task-bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {
                "task_id": "task-bad",
                "task_status": "FAILED",
                "message": "content policy violation"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.text_to_image("nope").await.expect_err("must fail");
    assert!(matches!(err, TongYiError::Provider(_)));
    assert!(err.to_string().contains("content policy violation"));
}

#[tokio::test]
async fn stuck_task_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_SYNTHESIS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {"task_id": "task-stuck", "task_status": "PENDING"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/task-stuck"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {"task_id": "task-stuck", "task_status": "RUNNING"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.text_to_image("slow").await.expect_err("must fail");
    assert!(matches!(err, TongYiError::Timeout(_)));
}

#[tokio::test]
async fn transcribe_submits_and_polls_task() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSCRIPTION_PATH))
        .and(header("X-DashScope-Async", "enable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {"task_id": "task-asr", "task_status": "PENDING"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/task-asr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {
                "task_id": "task-asr",
                "task_status": "SUCCEEDED",
                "results": [{"file_url": "https://example.com/a.wav", "text": "hello world"}]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let text = client
        .transcribe("https://example.com/a.wav")
        .await
        .expect("transcription");
    assert_eq!(text, "hello world");
}
