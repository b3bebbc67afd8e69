use axum::response::{IntoResponse, Response};
use http::StatusCode;
use swaram_core::{HttpError, RequestError, UpstreamError, error_response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChatError>;

/// Chat completion errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum ChatError {
    /// Upstream succeeded but `choices[0].message.content` is absent
    #[error("Sarvam API response did not contain a reply")]
    MissingReply,

    /// The inbound body was rejected before any upstream call
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Failure talking to the upstream API
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl HttpError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingReply => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Request(e) => e.status_code(),
            Self::Upstream(e) => e.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingReply => "upstream_shape_error",
            Self::Request(e) => e.error_type(),
            Self::Upstream(e) => e.error_type(),
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        if let Self::Request(e) = &self {
            tracing::warn!("rejected request: {e}");
        }

        error_response(&self)
    }
}
