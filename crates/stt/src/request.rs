use axum::{
    body::Body,
    extract::{FromRequest, Multipart, multipart::MultipartError},
};
use http::StatusCode;
use swaram_core::RequestError;

use crate::types::TranscriptionRequest;

/// Body limit for audio uploads (32 MiB)
pub(crate) const BODY_LIMIT_BYTES: usize = 32 << 20;

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Extractor for the multipart upload of `/api/stt`
///
/// Expects a binary `file` part and an optional `language_code` text part.
/// Unknown parts are ignored.
pub struct ExtractMultipart(pub TranscriptionRequest);

impl<S> FromRequest<S> for ExtractMultipart
where
    S: Send + Sync,
{
    type Rejection = RequestError;

    async fn from_request(request: http::Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with(MULTIPART_FORM_DATA));

        if !is_multipart {
            return Err(RequestError::UnsupportedMediaType(MULTIPART_FORM_DATA));
        }

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| RequestError::BadRequest(format!("Failed to parse multipart form: {e}")))?;

        let mut upload: Option<(Vec<u8>, String, String)> = None;
        let mut language_code: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(field_error)? {
            let field_name = field.name().unwrap_or_default().to_string();

            match field_name.as_str() {
                "file" => {
                    let filename = field.file_name().unwrap_or("audio.wav").to_string();
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let bytes = field.bytes().await.map_err(field_error)?;

                    upload = Some((bytes.to_vec(), filename, content_type));
                }
                "language_code" => {
                    let value = field.text().await.map_err(field_error)?;
                    let value = value.trim();

                    language_code = (!value.is_empty()).then(|| value.to_string());
                }
                _ => {}
            }
        }

        let Some((audio, filename, content_type)) = upload else {
            tracing::warn!("STT request without a 'file' part");
            return Err(RequestError::BadRequest(
                "Missing required 'file' field in multipart form".to_string(),
            ));
        };

        if audio.is_empty() {
            tracing::warn!(%filename, "STT request with an empty audio file");
            return Err(RequestError::BadRequest("Uploaded audio file is empty".to_string()));
        }

        Ok(Self(TranscriptionRequest {
            audio,
            filename,
            content_type,
            language_code,
        }))
    }
}

fn field_error(error: MultipartError) -> RequestError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        RequestError::PayloadTooLarge(BODY_LIMIT_BYTES)
    } else {
        RequestError::BadRequest(format!("Failed to read multipart form: {}", error.body_text()))
    }
}
