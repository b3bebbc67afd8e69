use serde::{Deserialize, Serialize};

/// Body of `POST /api/tts`
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    /// Text to speak; anything past the configured cap is dropped
    pub text: String,
    /// Target language, e.g. "hi-IN"
    #[serde(default)]
    pub language_code: Option<String>,
    /// Voice name in any casing, e.g. "Anushka"
    #[serde(default)]
    pub speaker: Option<String>,
}

/// Body returned by `POST /api/tts`
#[derive(Debug, Serialize)]
pub struct SpeechResponse {
    /// First clip produced upstream, base64 encoded audio
    pub audio_base64: String,
}

/// Wire format for the upstream synthesis request
#[derive(Debug, Serialize)]
pub(crate) struct SynthesisPayload<'a> {
    pub text: &'a str,
    pub target_language_code: &'a str,
    pub speaker: String,
    pub model: &'a str,
    pub enable_preprocessing: bool,
}

/// The part of the upstream synthesis response the gateway reads
#[derive(Debug, Deserialize)]
pub(crate) struct Synthesis {
    #[serde(default)]
    audios: Option<Vec<String>>,
}

impl Synthesis {
    pub fn into_first_clip(self) -> Option<String> {
        self.audios?.into_iter().next()
    }
}
