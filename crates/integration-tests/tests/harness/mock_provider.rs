//! Mock Google and Anthropic backends for integration tests
//!
//! Accepts any POST, records it, and answers in the wire format of the
//! chosen provider.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Which provider's wire format to speak
#[derive(Debug, Clone, Copy)]
pub enum Flavor {
    Google,
    Anthropic,
}

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum Reply {
    /// Success carrying this text
    Text(String),
    /// Error status with a provider-shaped error body carrying this message
    Status(u16, String),
    /// 200 with a body that is not valid JSON
    Garbage,
    /// Success, sent only after this delay
    Slow(Duration, String),
    /// Success whose text is the prompt the request carried
    Echo,
    /// 200 with this exact JSON body
    Json(Value),
}

/// A request as the mock saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Value,
}

pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    flavor: Flavor,
    reply: Reply,
    request_count: AtomicU32,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockProvider {
    pub async fn google(reply: Reply) -> anyhow::Result<Self> {
        Self::start(Flavor::Google, reply).await
    }

    pub async fn anthropic(reply: Reply) -> anyhow::Result<Self> {
        Self::start(Flavor::Anthropic, reply).await
    }

    async fn start(flavor: Flavor, reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            flavor,
            reply,
            request_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    pub fn base_url(&self) -> String {
        match self.state.flavor {
            Flavor::Google => format!("http://{}/v1beta", self.addr),
            Flavor::Anthropic => format!("http://{}/v1", self.addr),
        }
    }

    /// Number of requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Every request received, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Most recent request, if any arrived
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().unwrap().last().cloned()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle(State(state): State<Arc<MockState>>, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let prompt = prompt_text(state.flavor, &body).to_owned();
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_owned(),
        headers,
        body,
    });

    match &state.reply {
        Reply::Text(text) => Json(success_body(state.flavor, text)).into_response(),
        Reply::Slow(delay, text) => {
            tokio::time::sleep(*delay).await;
            Json(success_body(state.flavor, text)).into_response()
        }
        Reply::Status(status, message) => {
            let status = StatusCode::from_u16(*status).unwrap();
            (status, Json(error_body(state.flavor, status, message))).into_response()
        }
        Reply::Garbage => (StatusCode::OK, "<html>not json</html>").into_response(),
        Reply::Echo => Json(success_body(state.flavor, &prompt)).into_response(),
        Reply::Json(body) => Json(body.clone()).into_response(),
    }
}

fn prompt_text(flavor: Flavor, body: &Value) -> &str {
    let text = match flavor {
        Flavor::Google => &body["contents"][0]["parts"][0]["text"],
        Flavor::Anthropic => &body["messages"][0]["content"],
    };
    text.as_str().unwrap_or_default()
}

fn success_body(flavor: Flavor, text: &str) -> Value {
    match flavor {
        Flavor::Google => json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5}
        }),
        Flavor::Anthropic => json!({
            "id": "msg_mock",
            "type": "message",
            "role": "assistant",
            "model": "claude-test",
            "content": [{"type": "text", "text": text}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }),
    }
}

fn error_body(flavor: Flavor, status: StatusCode, message: &str) -> Value {
    match flavor {
        Flavor::Google => json!({
            "error": {"code": status.as_u16(), "message": message, "status": "ERROR"}
        }),
        Flavor::Anthropic => json!({
            "type": "error",
            "error": {"type": "api_error", "message": message}
        }),
    }
}
