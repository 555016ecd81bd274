//! Provider clients against a local mock upstream (no live network).

use std::sync::{Arc, Mutex};

use ai_llm_service::{
    AiLlmError, FieldKind, GenerationRequest, LlmModelConfig, LlmProvider, LlmService,
    OutputSchema, ProviderError, ProviderErrorKind, TextGenerator,
};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
};
use serde_json::{Value, json};

#[derive(Debug, Default)]
struct Seen {
    path: String,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct Mock {
    status: StatusCode,
    reply: Value,
    seen: Arc<Mutex<Seen>>,
}

async fn record(
    State(mock): State<Mock>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    {
        let mut seen = mock.seen.lock().unwrap();
        seen.path = uri.path().to_string();
        seen.api_key = headers
            .get("x-goog-api-key")
            .or_else(|| headers.get("authorization"))
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.body = body;
    }
    (mock.status, Json(mock.reply.clone()))
}

async fn spawn_upstream(status: StatusCode, reply: Value) -> (String, Arc<Mutex<Seen>>) {
    let seen = Arc::new(Mutex::new(Seen::default()));
    let app = Router::new().fallback(record).with_state(Mock {
        status,
        reply,
        seen: seen.clone(),
    });
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn config(provider: LlmProvider, endpoint: String) -> LlmModelConfig {
    LlmModelConfig {
        provider,
        model: "configured-model".into(),
        endpoint,
        api_key: Some("test-key".into()),
        max_tokens: None,
        temperature: None,
        top_p: None,
        timeout_secs: Some(5),
    }
}

fn schema() -> OutputSchema {
    OutputSchema::new("analysis_response", "Complexity verdict")
        .field("bigO", FieldKind::String, "Big O notation")
        .field("complexity", FieldKind::String, "Low/Medium/High")
}

#[tokio::test]
async fn gemini_returns_candidate_text_and_sends_schema() {
    let (endpoint, seen) = spawn_upstream(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "{\"bigO\":\"O(n)\"}" }] },
                "finishReason": "STOP"
            }]
        }),
    )
    .await;
    let svc = LlmService::new(config(LlmProvider::Gemini, endpoint));
    let schema = schema();

    let text = svc
        .generate(GenerationRequest {
            model: "gemini-test",
            prompt: "analyze this",
            schema: &schema,
        })
        .await
        .unwrap();

    assert_eq!(text.as_deref(), Some("{\"bigO\":\"O(n)\"}"));
    let seen = seen.lock().unwrap();
    assert_eq!(seen.path, "/v1beta/models/gemini-test:generateContent");
    assert_eq!(seen.api_key.as_deref(), Some("test-key"));
    assert_eq!(seen.body["contents"][0]["parts"][0]["text"], "analyze this");
    assert_eq!(
        seen.body["generationConfig"]["responseSchema"]["required"],
        json!(["bigO", "complexity"])
    );
}

#[tokio::test]
async fn gemini_without_candidates_yields_none() {
    let (endpoint, _) = spawn_upstream(StatusCode::OK, json!({ "candidates": [] })).await;
    let svc = LlmService::new(config(LlmProvider::Gemini, endpoint));
    let schema = schema();

    let text = svc
        .generate(GenerationRequest {
            model: "configured-model",
            prompt: "p",
            schema: &schema,
        })
        .await
        .unwrap();

    assert_eq!(text, None);
}

#[tokio::test]
async fn gemini_error_status_surfaces_with_snippet() {
    let (endpoint, _) = spawn_upstream(
        StatusCode::FORBIDDEN,
        json!({ "error": { "code": 403, "message": "API key not valid" } }),
    )
    .await;
    let svc = LlmService::new(config(LlmProvider::Gemini, endpoint));
    let schema = schema();

    let err = svc
        .generate(GenerationRequest {
            model: "configured-model",
            prompt: "p",
            schema: &schema,
        })
        .await
        .unwrap_err();

    match &err {
        AiLlmError::Provider(ProviderError {
            kind: ProviderErrorKind::HttpStatus(http),
            ..
        }) => {
            assert_eq!(http.status, StatusCode::FORBIDDEN);
            assert!(http.snippet.contains("API key not valid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn openai_reads_first_choice_content() {
    let (endpoint, seen) = spawn_upstream(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "role": "assistant", "content": "{\"bigO\":\"O(1)\"}" } }] }),
    )
    .await;
    let svc = LlmService::new(config(LlmProvider::OpenAI, endpoint));
    let schema = schema();

    let text = svc
        .generate(GenerationRequest {
            model: "configured-model",
            prompt: "p",
            schema: &schema,
        })
        .await
        .unwrap();

    assert_eq!(text.as_deref(), Some("{\"bigO\":\"O(1)\"}"));
    let seen = seen.lock().unwrap();
    assert_eq!(seen.path, "/v1/chat/completions");
    assert_eq!(seen.api_key.as_deref(), Some("Bearer test-key"));
    assert_eq!(seen.body["response_format"]["type"], "json_schema");
}

#[tokio::test]
async fn ollama_sends_format_schema() {
    let (endpoint, seen) = spawn_upstream(
        StatusCode::OK,
        json!({ "model": "configured-model", "response": "{\"bigO\":\"O(n^2)\"}", "done": true }),
    )
    .await;
    let mut cfg = config(LlmProvider::Ollama, endpoint);
    cfg.api_key = None;
    let svc = LlmService::new(cfg);
    let schema = schema();

    let text = svc
        .generate(GenerationRequest {
            model: "configured-model",
            prompt: "p",
            schema: &schema,
        })
        .await
        .unwrap();

    assert_eq!(text.as_deref(), Some("{\"bigO\":\"O(n^2)\"}"));
    let seen = seen.lock().unwrap();
    assert_eq!(seen.path, "/api/generate");
    assert_eq!(seen.body["stream"], false);
    assert_eq!(seen.body["format"]["type"], "object");
}
