use swaram_config::TtsConfig;
use swaram_core::UpstreamClient;

use crate::{
    error::TtsError,
    types::{SpeechRequest, SpeechResponse, Synthesis, SynthesisPayload},
};

const SYNTHESIS_PATH: &str = "/text-to-speech";

/// Forwards text to the upstream synthesis endpoint
pub struct Server {
    upstream: UpstreamClient,
    config: TtsConfig,
}

impl Server {
    pub fn new(upstream: UpstreamClient, config: TtsConfig) -> Self {
        Self { upstream, config }
    }

    /// Fail fast when no upstream credential is configured
    pub fn ensure_credential(&self) -> crate::error::Result<()> {
        Ok(self.upstream.ensure_credential(SYNTHESIS_PATH)?)
    }

    /// Synthesize speech and return the first audio clip
    pub async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let payload = self.payload(&request);

        tracing::info!(
            chars = request.text.chars().count(),
            forwarded_chars = payload.text.chars().count(),
            language_code = %payload.target_language_code,
            speaker = %payload.speaker,
            "TTS request received"
        );

        let raw = self.upstream.post_json(SYNTHESIS_PATH, &payload).await?;

        let synthesis: Synthesis = swaram_core::decode(SYNTHESIS_PATH, &raw)?;

        let Some(audio_base64) = synthesis.into_first_clip() else {
            tracing::error!(endpoint = SYNTHESIS_PATH, "upstream synthesis returned no audio clips");
            return Err(TtsError::NoAudio);
        };

        tracing::debug!(audio_len = audio_base64.len(), "TTS audio received");

        Ok(SpeechResponse { audio_base64 })
    }

    fn payload<'a>(&'a self, request: &'a SpeechRequest) -> SynthesisPayload<'a> {
        let speaker = request.speaker.as_deref().unwrap_or(&self.config.default_speaker);

        SynthesisPayload {
            text: truncate_chars(&request.text, self.config.max_chars),
            target_language_code: request
                .language_code
                .as_deref()
                .unwrap_or(&self.config.default_language),
            speaker: speaker.to_lowercase(),
            model: &self.config.model,
            enable_preprocessing: self.config.enable_preprocessing,
        }
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
