use axum::body::Body;
use serde::de::DeserializeOwned;

use crate::error::RequestError;

/// Extractor for JSON request bodies
///
/// Unlike `axum::Json` it renders rejections with the gateway's error body.
pub struct ExtractPayload<T>(pub T);

/// Body limit for JSON requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

const APPLICATION_JSON: &str = "application/json";

impl<S, T> axum::extract::FromRequest<S> for ExtractPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RequestError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        let is_json = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(APPLICATION_JSON));

        if !is_json {
            return Err(RequestError::UnsupportedMediaType(APPLICATION_JSON));
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                RequestError::PayloadTooLarge(BODY_LIMIT_BYTES)
            } else {
                RequestError::BadRequest(format!("Failed to read request body: {err}"))
            }
        })?;

        serde_json::from_slice::<T>(&bytes)
            .map(Self)
            .map_err(|e| RequestError::BadRequest(format!("Failed to parse request body: {e}")))
    }
}
