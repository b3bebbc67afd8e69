use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each endpoint crate's error type so that every failure
/// renders the same JSON body.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error category (e.g. `upstream_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String {
        self.to_string()
    }
}

/// JSON error body returned to the browser client
///
/// `detail` matches what the client already reads; `type` lets callers tell
/// failure categories apart without parsing the message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub r#type: String,
}

/// Render any [`HttpError`] as a response
pub fn error_response<E: HttpError + ?Sized>(error: &E) -> Response {
    let body = ErrorBody {
        detail: error.client_message(),
        r#type: error.error_type().to_string(),
    };

    (error.status_code(), Json(body)).into_response()
}

/// Inbound request could not be turned into a typed payload
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Unsupported Content-Type, expected: '{0}'")]
    UnsupportedMediaType(&'static str),

    #[error("Request body is too large, limit is {0} bytes")]
    PayloadTooLarge(usize),

    #[error("{0}")]
    BadRequest(String),
}

impl HttpError for RequestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &str {
        "invalid_request_error"
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::warn!("rejected request: {self}");
        error_response(&self)
    }
}
