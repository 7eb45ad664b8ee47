#![allow(dead_code)]

use std::{
    io::Write,
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use ai_llm_service::{LlmModelConfig, LlmProvider, LlmServiceProfiles};
use api::{AppState, cors_layer, router};
use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use contextor::{ContentSource, Contextor, RemoteContent};
use rag_store::{EmbeddingsProvider, RagConfig, RagStore, embed::EmbedFuture};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const ORIGIN: &str = "https://my-portfolio-fhyq.onrender.com";

pub const RESUME: &str = "Jane Doe, backend engineer.\n\n\
Skills: Rust, Tokio, Axum, PostgreSQL.\n\n\
Education: B.E. in Computer Science from VTU.\n\n\
Hobbies: chess and long-distance cycling.";

/// Bag-of-letters embedder so retrieval is deterministic without a model.
pub struct LetterEmbedder;

impl EmbeddingsProvider for LetterEmbedder {
    fn name(&self) -> &str {
        "letters"
    }

    fn embed<'a>(&'a self, text: &'a str) -> EmbedFuture<'a, Vec<f32>> {
        Box::pin(async move {
            let mut v = vec![0.0f32; 26];
            for c in text.to_ascii_lowercase().bytes() {
                if c.is_ascii_lowercase() {
                    v[(c - b'a') as usize] += 1.0;
                }
            }
            Ok(v)
        })
    }
}

/// Fake chat endpoint: echoes the prompt, or fails with 500 while `fail` is set.
#[derive(Clone, Default)]
pub struct FakeLlm {
    pub fail: Arc<AtomicBool>,
    pub calls: Arc<AtomicUsize>,
}

async fn chat(State(llm): State<FakeLlm>, Json(body): Json<Value>) -> Response {
    llm.calls.fetch_add(1, Ordering::SeqCst);
    if llm.fail.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }
    let prompt = body["messages"][0]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": format!("echo: {prompt}") } }]
    }))
    .into_response()
}

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn spawn_llm(fake: FakeLlm) -> Arc<LlmServiceProfiles> {
    let addr = spawn(
        Router::new()
            .route("/v1/chat/completions", post(chat))
            .with_state(fake),
    )
    .await;
    llm_at(&format!("http://{addr}"))
}

pub fn llm_at(endpoint: &str) -> Arc<LlmServiceProfiles> {
    let cfg = LlmModelConfig {
        provider: LlmProvider::Groq,
        model: "llama-3.3-70b-versatile".into(),
        endpoint: endpoint.into(),
        api_key: Some("gsk_test".into()),
        max_tokens: None,
        temperature: None,
        top_p: None,
        timeout_secs: Some(5),
    };
    Arc::new(LlmServiceProfiles::new(cfg, None).unwrap())
}

/// Indexes [`RESUME`] from a temporary text file.
pub async fn indexed_source() -> ContentSource {
    let mut f = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    f.write_all(RESUME.as_bytes()).unwrap();

    let cfg = RagConfig {
        source_path: f.path().to_path_buf(),
        chunk_size: 60,
        chunk_overlap: 10,
        top_k: 3,
    };
    let store = RagStore::build(cfg, Arc::new(LetterEmbedder)).await.unwrap();
    ContentSource::Indexed(Arc::new(store))
}

pub fn remote_source(url: String) -> ContentSource {
    ContentSource::Remote(RemoteContent::new(url))
}

pub fn app(source: ContentSource, llm: Arc<LlmServiceProfiles>) -> Router {
    let state = Arc::new(AppState::new(Contextor::new(source, llm)));
    router(state, cors_layer(&[ORIGIN.to_string()]).unwrap())
}

pub fn ask_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ask")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
