use axum::response::{IntoResponse, Response};
use http::StatusCode;
use swaram_core::{HttpError, RequestError, UpstreamError, error_response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Text-to-speech errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum TtsError {
    /// Upstream succeeded but produced no audio clip
    #[error("No audio returned from Sarvam API")]
    NoAudio,

    /// The inbound body was rejected before any upstream call
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Failure talking to the upstream API
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl HttpError for TtsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NoAudio => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Request(e) => e.status_code(),
            Self::Upstream(e) => e.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::NoAudio => "no_audio",
            Self::Request(e) => e.error_type(),
            Self::Upstream(e) => e.error_type(),
        }
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        if let Self::Request(e) = &self {
            tracing::warn!("rejected request: {e}");
        }

        error_response(&self)
    }
}
