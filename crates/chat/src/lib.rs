#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod persona;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{FromRequest, Request, State},
    routing::post,
};
use swaram_core::{ExtractPayload, UpstreamClient};

pub use error::{ChatError, Result};
pub use persona::with_persona;
pub use server::Server;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};

/// Build the chat server from configuration
pub fn build_server(config: &swaram_config::Config, upstream: UpstreamClient) -> Arc<Server> {
    Arc::new(Server::new(upstream, config.chat.clone()))
}

/// Create the endpoint router for chat
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/chat", post(complete))
}

/// Handle chat completion requests
async fn complete(State(server): State<Arc<Server>>, request: Request) -> Result<Json<ChatResponse>> {
    server.ensure_credential()?;

    let ExtractPayload(payload) = ExtractPayload::<ChatRequest>::from_request(request, &()).await?;

    let response = server.complete(payload).await?;

    tracing::debug!("chat completion complete");

    Ok(Json(response))
}
