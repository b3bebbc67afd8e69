#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Building blocks shared by the STT, chat and TTS endpoints

mod error;
mod http_client;
mod payload;
mod upstream;

pub use error::{ErrorBody, HttpError, RequestError, error_response};
pub use payload::ExtractPayload;
pub use upstream::{API_KEY_HEADER, Result, UpstreamClient, UpstreamError, decode};
