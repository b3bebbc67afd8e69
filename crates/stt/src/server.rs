use reqwest::multipart::{Form, Part};
use serde_json::Value;
use swaram_config::SttConfig;
use swaram_core::UpstreamClient;

use crate::{error::SttError, types::TranscriptionRequest};

const TRANSCRIBE_PATH: &str = "/speech-to-text";

/// Forwards audio uploads to the upstream transcription endpoint
pub struct Server {
    upstream: UpstreamClient,
    config: SttConfig,
}

impl Server {
    pub fn new(upstream: UpstreamClient, config: SttConfig) -> Self {
        Self { upstream, config }
    }

    /// Fail fast when no upstream credential is configured
    pub fn ensure_credential(&self) -> crate::error::Result<()> {
        Ok(self.upstream.ensure_credential(TRANSCRIBE_PATH)?)
    }

    /// Transcribe an upload, returning the upstream JSON untouched
    pub async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<Value> {
        let language_code = request
            .language_code
            .unwrap_or_else(|| self.config.default_language.clone());

        tracing::info!(
            filename = %request.filename,
            bytes = request.audio.len(),
            language_code = %language_code,
            "STT request received"
        );

        let form = self.build_form(request.audio, request.filename, &request.content_type, language_code)?;

        let response = self.upstream.post_multipart(TRANSCRIBE_PATH, form).await?;

        let transcript_len = response.get("transcript").and_then(Value::as_str).map(str::len);

        tracing::debug!(transcript_len = ?transcript_len, "STT response received");

        Ok(response)
    }

    fn build_form(
        &self,
        audio: Vec<u8>,
        filename: String,
        content_type: &str,
        language_code: String,
    ) -> crate::error::Result<Form> {
        let file = Part::bytes(audio)
            .file_name(filename)
            .mime_str(content_type)
            .map_err(|e| {
                tracing::warn!("rejecting audio with content type '{content_type}': {e}");
                SttError::InvalidRequest(format!("Invalid audio content type '{content_type}': {e}"))
            })?;

        Ok(Form::new()
            .part("file", file)
            .text("model", self.config.model.clone())
            .text("language_code", language_code))
    }
}
