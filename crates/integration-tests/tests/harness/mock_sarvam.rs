//! Mock Sarvam backend for integration tests
//!
//! Serves the three upstream paths the gateway calls and records what it
//! received so tests can assert on the outbound request.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// How the mock answers every request
#[derive(Debug, Clone)]
enum Behavior {
    /// Canned success bodies
    Ok,
    /// Chat replies with the content of the last user message
    Echo,
    /// Every endpoint answers with this status and raw body
    Fixed { status: u16, body: String },
    /// TTS succeeds with an empty `audios` list
    NoAudio,
    /// Canned success bodies after a delay
    Delay(Duration),
    /// Every endpoint answers 307 pointing at this URL
    Redirect(String),
}

/// One part of a recorded multipart upload
#[derive(Debug, Clone)]
pub struct RecordedField {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl RecordedField {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// Mock Sarvam backend that returns predictable responses
pub struct MockSarvam {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockSarvamState>,
}

struct MockSarvamState {
    behavior: Behavior,
    stt_count: AtomicU32,
    chat_count: AtomicU32,
    tts_count: AtomicU32,
    last_api_key: Mutex<Option<String>>,
    last_json: Mutex<Option<Value>>,
    last_form: Mutex<Vec<RecordedField>>,
}

impl MockSarvam {
    /// Start the mock server with canned success responses
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Ok).await
    }

    /// Start a mock whose chat endpoint echoes the last user message
    pub async fn start_echo() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Echo).await
    }

    /// Start a mock that answers every request with `status` and `body`
    pub async fn start_failing(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Fixed {
            status,
            body: body.to_owned(),
        })
        .await
    }

    /// Start a mock that answers every request with 200 and `body`
    pub async fn start_with_body(body: &str) -> anyhow::Result<Self> {
        Self::start_failing(200, body).await
    }

    /// Start a mock whose TTS endpoint returns no audio clips
    pub async fn start_without_audio() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::NoAudio).await
    }

    /// Start a mock that redirects every request to `location`
    pub async fn start_redirecting(location: &str) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Redirect(location.to_owned())).await
    }

    /// Start a mock that waits `delay` before answering
    pub async fn start_delayed(delay: Duration) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Delay(delay)).await
    }

    async fn start_inner(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockSarvamState {
            behavior,
            stt_count: AtomicU32::new(0),
            chat_count: AtomicU32::new(0),
            tts_count: AtomicU32::new(0),
            last_api_key: Mutex::new(None),
            last_json: Mutex::new(None),
            last_form: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/speech-to-text", routing::post(handle_transcribe))
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .route("/text-to-speech", routing::post(handle_synthesize))
            .with_state(Arc::clone(&state));

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

    /// Base URL for configuring the gateway's upstream
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of transcription requests received
    pub fn stt_count(&self) -> u32 {
        self.state.stt_count.load(Ordering::Relaxed)
    }

    /// Number of chat completion requests received
    pub fn chat_count(&self) -> u32 {
        self.state.chat_count.load(Ordering::Relaxed)
    }

    /// Number of synthesis requests received
    pub fn tts_count(&self) -> u32 {
        self.state.tts_count.load(Ordering::Relaxed)
    }

    /// Total requests received on any path
    pub fn total_count(&self) -> u32 {
        self.stt_count() + self.chat_count() + self.tts_count()
    }

    /// Value of the `api-subscription-key` header on the last request
    pub fn last_api_key(&self) -> Option<String> {
        self.state.last_api_key.lock().unwrap().clone()
    }

    /// Last JSON body received on the chat or TTS path
    pub fn last_json(&self) -> Option<Value> {
        self.state.last_json.lock().unwrap().clone()
    }

    /// Named part of the last multipart upload
    pub fn form_field(&self, name: &str) -> Option<RecordedField> {
        self.state
            .last_form
            .lock()
            .unwrap()
            .iter()
            .find(|field| field.name == name)
            .cloned()
    }
}

impl Drop for MockSarvam {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

impl MockSarvamState {
    fn record_key(&self, headers: &HeaderMap) {
        let key = headers
            .get("api-subscription-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        *self.last_api_key.lock().unwrap() = key;
    }

    /// Apply delay or failure; `Some` short-circuits the handler
    async fn intercept(&self) -> Option<Response> {
        match &self.behavior {
            Behavior::Fixed { status, body } => {
                let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                Some((status, body.clone()).into_response())
            }
            Behavior::Redirect(location) => Some(
                (
                    StatusCode::TEMPORARY_REDIRECT,
                    [(axum::http::header::LOCATION, location.clone())],
                    "moved",
                )
                    .into_response(),
            ),
            Behavior::Delay(delay) => {
                tokio::time::sleep(*delay).await;
                None
            }
            Behavior::Ok | Behavior::Echo | Behavior::NoAudio => None,
        }
    }
}

async fn handle_transcribe(
    State(state): State<Arc<MockSarvamState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    state.stt_count.fetch_add(1, Ordering::Relaxed);
    state.record_key(&headers);

    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let data = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();

        fields.push(RecordedField {
            name,
            file_name,
            content_type,
            data,
        });
    }
    *state.last_form.lock().unwrap() = fields;

    if let Some(response) = state.intercept().await {
        return response;
    }

    Json(json!({
        "request_id": "mock-stt",
        "transcript": "नमस्ते, आप कैसे हैं?",
        "language_code": "hi-IN"
    }))
    .into_response()
}

async fn handle_chat_completions(
    State(state): State<Arc<MockSarvamState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.chat_count.fetch_add(1, Ordering::Relaxed);
    state.record_key(&headers);
    *state.last_json.lock().unwrap() = Some(body.clone());

    if let Some(response) = state.intercept().await {
        return response;
    }

    let content = match state.behavior {
        Behavior::Echo => body["messages"]
            .as_array()
            .and_then(|messages| messages.iter().rev().find(|m| m["role"] == "user"))
            .and_then(|m| m["content"].as_str())
            .unwrap_or_default()
            .to_owned(),
        _ => "Hi there".to_owned(),
    };

    Json(json!({
        "choices": [{"message": {"content": content}}]
    }))
    .into_response()
}

async fn handle_synthesize(
    State(state): State<Arc<MockSarvamState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.tts_count.fetch_add(1, Ordering::Relaxed);
    state.record_key(&headers);
    *state.last_json.lock().unwrap() = Some(body);

    if let Some(response) = state.intercept().await {
        return response;
    }

    let audios: Vec<&str> = match state.behavior {
        Behavior::NoAudio => Vec::new(),
        _ => vec!["QUJD"],
    };

    Json(json!({ "request_id": "mock-tts", "audios": audios })).into_response()
}
