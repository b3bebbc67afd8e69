#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{FromRequest, Request, State},
    routing::post,
};
use swaram_core::{ExtractPayload, UpstreamClient};

pub use error::{Result, TtsError};
pub use server::{Server, truncate_chars};
pub use types::{SpeechRequest, SpeechResponse};

/// Build the TTS server from configuration
pub fn build_server(config: &swaram_config::Config, upstream: UpstreamClient) -> Arc<Server> {
    Arc::new(Server::new(upstream, config.tts.clone()))
}

/// Create the endpoint router for TTS
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/tts", post(synthesize))
}

/// Handle speech synthesis requests
async fn synthesize(State(server): State<Arc<Server>>, request: Request) -> Result<Json<SpeechResponse>> {
    server.ensure_credential()?;

    let ExtractPayload(payload) = ExtractPayload::<SpeechRequest>::from_request(request, &()).await?;

    let response = server.synthesize(payload).await?;

    tracing::debug!("speech synthesis complete");

    Ok(Json(response))
}
