#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, FromRequest, Request, State},
    routing::post,
};
use serde_json::Value;
use swaram_core::UpstreamClient;

pub use error::{Result, SttError};
pub use server::Server;
pub use types::TranscriptionRequest;
use request::{BODY_LIMIT_BYTES, ExtractMultipart};

/// Build the STT server from configuration
pub fn build_server(config: &swaram_config::Config, upstream: UpstreamClient) -> Arc<Server> {
    Arc::new(Server::new(upstream, config.stt.clone()))
}

/// Create the endpoint router for STT
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route(
        "/api/stt",
        post(transcribe).layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
    )
}

/// Handle transcription requests
///
/// The credential check runs before the upload is read, so a misconfigured
/// gateway answers 500 even for malformed input.
async fn transcribe(State(server): State<Arc<Server>>, request: Request) -> Result<Json<Value>> {
    server.ensure_credential()?;

    let ExtractMultipart(upload) = ExtractMultipart::from_request(request, &()).await?;

    let response = server.transcribe(upload).await?;

    tracing::debug!("transcription complete");

    Ok(Json(response))
}
