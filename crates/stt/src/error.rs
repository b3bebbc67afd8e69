use axum::response::{IntoResponse, Response};
use http::StatusCode;
use swaram_core::{HttpError, RequestError, UpstreamError, error_response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Speech-to-text errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum SttError {
    /// The upload could not be forwarded as given
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The inbound body was rejected before any upstream call
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Failure talking to the upstream API
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Request(e) => e.status_code(),
            Self::Upstream(e) => e.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Request(e) => e.error_type(),
            Self::Upstream(e) => e.error_type(),
        }
    }
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        if let Self::Request(e) = &self {
            tracing::warn!("rejected request: {e}");
        }

        error_response(&self)
    }
}
